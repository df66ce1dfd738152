// first line of the card
pub const HEADER: &str = "OCCUPATIONS";
// number of occupation numbers per line
pub const ROW_WIDTH: usize = 10;
// name of the written card
pub const OCCUPATIONS_FILE_NAME: &str = "occupations.out";
// an occupied band
pub const OCCUPIED: f64 = 1.0;
// an empty band
pub const UNOCCUPIED: f64 = 0.0;
// placeholder for an empty set of bands in the summaries
pub const NO_BANDS: &str = "none";
