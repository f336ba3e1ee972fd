use strum::{Display, EnumIter, EnumString};

/// Which end of the route a marker pins down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum MarkerRole {
    Source,
    Target,
}
