/// Teardown hook called by the driver on every element and distribution
/// before they are dropped.
///
/// Types that hold nothing to release implement this with an empty `impl`
/// block and get the no-op body.
pub trait Finalize {
    fn finalize(&mut self) {}
}
