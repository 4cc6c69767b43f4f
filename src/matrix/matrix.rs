use crate::error::Result;

pub trait Matrix<T>
where
    Self: Sized,
{
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self>;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn rows(&self) -> usize;
    fn cols(&self) -> usize;

    fn is_ref(&self) -> bool;
    fn is_rref(&self) -> bool;
    fn rank(&self) -> usize;
    fn identity(n: usize) -> Result<Self>;
    fn transpose(&self) -> Self;
    fn at(&self, row: usize, col: usize) -> T;
}
