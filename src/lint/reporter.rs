//! Problem reporters.
//!
//! A [`Reporter`] is the sink a rule writes its problems into. The host
//! supplies one per run; decorators can sit in front of it to rewrite
//! problems before they arrive.

use super::problem::Problem;

/// Receives the problems a rule reports, in report order.
pub trait Reporter {
    fn report(&mut self, problem: Problem);
}

impl Reporter for Vec<Problem> {
    fn report(&mut self, problem: Problem) {
        self.push(problem);
    }
}

/// Reporter backed by a closure. See [`report_fn`].
pub struct ReportFn<F>(F);

impl<F: FnMut(Problem)> Reporter for ReportFn<F> {
    fn report(&mut self, problem: Problem) {
        (self.0)(problem)
    }
}

/// Build a reporter from a closure.
pub fn report_fn<F: FnMut(Problem)>(f: F) -> ReportFn<F> {
    ReportFn(f)
}
