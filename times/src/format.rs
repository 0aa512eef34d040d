use std::fmt;
use std::fmt::{Display, Formatter};

use crate::verify::FieldName;
use crate::{Date, Minutes};

/// Formats as `h:mm`, with a leading `-` for negative amounts.
impl Display for Minutes {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let minutes = self.into_inner();
        let sign = if minutes < 0 { "-" } else { "" };
        let minutes = minutes.unsigned_abs();
        write!(f, "{sign}{}:{:0>2}", minutes / 60, minutes % 60)
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Display for FieldName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
