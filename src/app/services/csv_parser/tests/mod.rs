//! Test utilities for CSV parser testing
//!
//! Shared fixtures used across the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;


/// Header of the NUFORC scrubbed export
pub const NUFORC_HEADER: &str =
    "datetime,city,state,country,shape,duration (seconds),duration (hours/min),comments,date posted,latitude,longitude";

/// A small slice of the NUFORC export, including its usual defects
pub fn create_test_sightings_csv() -> String {
    format!(
        "{NUFORC_HEADER}\n\
10/10/1949 20:30,san marcos,tx,us,cylinder,2700,45 minutes,This event took place in early fall around 1949-50. It occurred after a Boy Scout meeting in the Baptist Church&#44,4/27/2004,29.8830556,-97.9411111\n\
10/10/1956 21:00,edna,tx,us,circle,20,1/2 hour,My older brother and twin sister were leaving the only Edna theater at about 9 PM&#44...we had our bikes and I had a baseball,1/17/2004,28.9783333,-96.6458333\n\
\n\
10/10/1960 20:00,kaneohe,hi,us,light,900,15 minutes,AS a Marine 1st Lt. flying an FJ4B fighter/attack aircraft,1/22/2004,21.4180556,-157.8036111\n\
10/10/1961 19:00,bristol,tn,us,sphere,300,5 minutes,My father is now 89 my brother 52 the girl with us now 51 myself 49,4/27/2007,36.5950000,-82.1888889\n"
    )
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
