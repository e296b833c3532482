//! The three fields extracted from every GRIB file.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A field stored at a fixed message slot of the input files.
pub enum Field {
    Pressure,
    UHori,
    UVert,
}

impl Field {
    /// Fields in message order: slot 0, 1 and 2 of each input file.
    pub const ALL: [Field; 3] = [Field::Pressure, Field::UHori, Field::UVert];

    /// Order in which the output files of one input are written.
    pub const WRITE_ORDER: [Field; 3] = [Field::UVert, Field::UHori, Field::Pressure];

    /// Index of the message holding this field.
    pub fn slot(&self) -> usize {
        match self {
            Field::Pressure => 0,
            Field::UHori => 1,
            Field::UVert => 2,
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            Field::Pressure => "pressure",
            Field::UHori => "u_hori",
            Field::UVert => "u_vert",
        }
    }

    /// Output file name for an input identified by `basename`.
    pub fn file_name(&self, basename: &str) -> String {
        format!("{}_{}.npy", self.prefix(), basename)
    }

    /// Whether a GRIB2 parameter (discipline, category, number) is the one
    /// this field is expected to carry. See WMO code table 4.2.
    pub fn matches_parameter(&self, discipline: u8, category: u8, number: u8) -> bool {
        match self {
            // pressure (3.0) or pressure reduced to MSL (3.1)
            Field::Pressure => discipline == 0 && category == 3 && matches!(number, 0 | 1),
            Field::UHori => discipline == 0 && category == 2 && number == 2,
            Field::UVert => discipline == 0 && category == 2 && number == 3,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

// -- Tests -------------------------------------------------------------------
