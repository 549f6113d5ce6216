//! Error chain traversal
use crate::error::CustomError;
use std::error::Error;

/// Iterator over an error and its `source()` links, outermost first.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Walks `err` and every cause below it.
pub fn chain<'a>(err: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// Returns the first [`CustomError`] found while walking the chain of `err`.
pub fn find_custom_error<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a CustomError> {
    chain(err).find_map(|link| link.downcast_ref::<CustomError>())
}
