//! Persistence port for built products.

use crate::product::Product;

/// Where accepted products go.
///
/// Implementations own identifier assignment: every successful `persist`
/// returns a positive identifier unique within the store. Failures are passed
/// back to the intake caller untouched.
pub trait ProductStore {
    type Error: std::error::Error + Send + Sync + 'static;

    fn persist(&self, product: Product) -> Result<u64, Self::Error>;
}

impl<S: ProductStore + ?Sized> ProductStore for &S {
    type Error = S::Error;

    fn persist(&self, product: Product) -> Result<u64, Self::Error> {
        (**self).persist(product)
    }
}

impl<S: ProductStore + ?Sized> ProductStore for std::sync::Arc<S> {
    type Error = S::Error;

    fn persist(&self, product: Product) -> Result<u64, Self::Error> {
        (**self).persist(product)
    }
}
