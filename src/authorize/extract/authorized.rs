/// Authorized data produced by a successful authorization of the call.
#[derive(Debug, Clone)]
pub struct Authorized<T>(pub T);

impl<T> Authorized<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}
