pub mod enrich;

pub mod util;
