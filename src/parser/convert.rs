/// Convert a u32 read from the file to usize or error on failure.
macro_rules! to_usize_or_err {
( $( $x:expr ),+ ) => {
        {
            $(
                use core::convert::TryFrom;
                match usize::try_from($x) {
                       Ok(res) => res,
                       Err(e) => return Err(nom::Err::Failure(crate::parser::err::AppleFileParserError::new(crate::parser::err::AppleFileParserErrorKind::ToUsizeConversionFailure(e)))),
               }
            )+
        }
    };
}
