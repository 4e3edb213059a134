/// The status of the spatial partitioning structure traversal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VisitStatus {
    /// The traversal should continue.
    Continue,
    /// The traversal should exit immediately.
    ExitEarly,
}

impl VisitStatus {
    /// `ExitEarly` if `exit` is `true`, `Continue` otherwise.
    #[inline]
    pub fn exit_if(exit: bool) -> Self {
        if exit {
            VisitStatus::ExitEarly
        } else {
            VisitStatus::Continue
        }
    }
}
