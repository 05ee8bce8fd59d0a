//! Generation of the broken-citation category catalog.
//!
//! These categories are not part of any traversed tree; they are a fixed
//! catalog of review buckets, one per kind/year/month, used as the second
//! problem source.

pub const CATALOG_ROOT: &str = "Wikipedia:Defekte_Weblinks";

const KINDS: [&str; 2] = ["Ungeprüfte_Archivlinks", "Ungeprüfte_Botmarkierungen"];
const YEARS: [u16; 2] = [2018, 2019];

/// The full broken-citation catalog: `<root>/<kind>_<year>-<month>` for
/// every kind, year and month. Pure and deterministic; generated once at
/// startup.
pub fn broken_link_catalog() -> Vec<String> {
    let mut catalog = Vec::with_capacity(KINDS.len() * YEARS.len() * 12);
    for kind in KINDS {
        for year in YEARS {
            for month in 1..=12 {
                catalog.push(format!("{CATALOG_ROOT}/{kind}_{year}-{month:02}"));
            }
        }
    }
    catalog
}
