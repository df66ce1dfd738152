// config file
pub const CONFIG_FILE_NAME: &str = "deltascf.toml";
// print level
pub const VERBOSE: i8 = 0;

// BAND SPECIFICATION
// total number of bands
pub const NBND: usize = 152;
// number of occupied bands in the spin-up channel
pub const NUP_OCC: usize = 128;
// number of occupied bands in the spin-down channel
pub const NDOWN_OCC: usize = 126;

// ELECTRONS
// spin multiplicity 2S + 1
pub const MULTIPLICITY: usize = 1;
// number of empty bands above the HOMO
pub const N_EXCITED_STATES: usize = 25;

// EXCITATIONS
// append the HOMO -> LUMO excitation of the target channel
pub const HOMO_LUMO: bool = false;
