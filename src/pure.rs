use crate::cursor::ByteCursor;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser that always succeeds with a fixed value without consuming input
#[derive(Debug, Clone)]
pub struct Pure<T> {
    value: T,
}

impl<T> Pure<T> {
    pub fn new(value: T) -> Self {
        Pure { value }
    }
}

impl<'code, T> Parser<'code> for Pure<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, T> {
        Ok((self.value.clone(), cursor))
    }
}

/// Convenience function to create a Pure parser
pub fn pure<T: Clone>(value: T) -> Pure<T> {
    Pure::new(value)
}

/// Parser that succeeds with `T::default()` without consuming input
pub fn default<T: Clone + Default>() -> Pure<T> {
    Pure::new(T::default())
}
