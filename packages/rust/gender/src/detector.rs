//! Offline name-to-gender detector.
//!
//! A deterministic, case-insensitive lookup over an embedded table of given
//! names with strongly conventional gender associations. Names that are
//! ambiguous across cultures are deliberately absent so they fall through to
//! the cache/service cascade instead of getting a low-quality local guess.

use std::collections::HashMap;

use gendercite_shared::Gender;

/// Embedded name table, all-lowercase keys.
static NAME_TABLE: &[(&str, Gender)] = &[
    ("aaron", Gender::Male),
    ("abigail", Gender::Female),
    ("adam", Gender::Male),
    ("alexander", Gender::Male),
    ("alice", Gender::Female),
    ("amanda", Gender::Female),
    ("amber", Gender::Female),
    ("amy", Gender::Female),
    ("andrea", Gender::Female),
    ("andrew", Gender::Male),
    ("angela", Gender::Female),
    ("ann", Gender::Female),
    ("anna", Gender::Female),
    ("anne", Gender::Female),
    ("anthony", Gender::Male),
    ("arthur", Gender::Male),
    ("ashley", Gender::Female),
    ("austin", Gender::Male),
    ("barbara", Gender::Female),
    ("benjamin", Gender::Male),
    ("betty", Gender::Female),
    ("brandon", Gender::Male),
    ("brenda", Gender::Female),
    ("brian", Gender::Male),
    ("brittany", Gender::Female),
    ("bryan", Gender::Male),
    ("carl", Gender::Male),
    ("carol", Gender::Female),
    ("carolyn", Gender::Female),
    ("catherine", Gender::Female),
    ("charles", Gender::Male),
    ("charlotte", Gender::Female),
    ("cheryl", Gender::Female),
    ("christian", Gender::Male),
    ("christina", Gender::Female),
    ("christine", Gender::Female),
    ("christopher", Gender::Male),
    ("cynthia", Gender::Female),
    ("daniel", Gender::Male),
    ("danielle", Gender::Female),
    ("david", Gender::Male),
    ("deborah", Gender::Female),
    ("debra", Gender::Female),
    ("denise", Gender::Female),
    ("dennis", Gender::Male),
    ("diana", Gender::Female),
    ("diane", Gender::Female),
    ("donald", Gender::Male),
    ("donna", Gender::Female),
    ("doris", Gender::Female),
    ("dorothy", Gender::Female),
    ("douglas", Gender::Male),
    ("dylan", Gender::Male),
    ("edward", Gender::Male),
    ("elizabeth", Gender::Female),
    ("emily", Gender::Female),
    ("emma", Gender::Female),
    ("eric", Gender::Male),
    ("ethan", Gender::Male),
    ("evelyn", Gender::Female),
    ("frances", Gender::Female),
    ("frank", Gender::Male),
    ("gary", Gender::Male),
    ("george", Gender::Male),
    ("gerald", Gender::Male),
    ("gloria", Gender::Female),
    ("grace", Gender::Female),
    ("gregory", Gender::Male),
    ("hannah", Gender::Female),
    ("harold", Gender::Male),
    ("heather", Gender::Female),
    ("helen", Gender::Female),
    ("henry", Gender::Male),
    ("isabella", Gender::Female),
    ("jack", Gender::Male),
    ("jacob", Gender::Male),
    ("jacqueline", Gender::Female),
    ("james", Gender::Male),
    ("jane", Gender::Female),
    ("janet", Gender::Female),
    ("janice", Gender::Female),
    ("jason", Gender::Male),
    ("jean", Gender::Female),
    ("jeffrey", Gender::Male),
    ("jennifer", Gender::Female),
    ("jeremy", Gender::Male),
    ("jesse", Gender::Male),
    ("jessica", Gender::Female),
    ("joan", Gender::Female),
    ("john", Gender::Male),
    ("jonathan", Gender::Male),
    ("jose", Gender::Male),
    ("joseph", Gender::Male),
    ("joshua", Gender::Male),
    ("joyce", Gender::Female),
    ("judith", Gender::Female),
    ("judy", Gender::Female),
    ("julia", Gender::Female),
    ("julie", Gender::Female),
    ("justin", Gender::Male),
    ("karen", Gender::Female),
    ("katherine", Gender::Female),
    ("kathleen", Gender::Female),
    ("kathryn", Gender::Female),
    ("kayla", Gender::Female),
    ("keith", Gender::Male),
    ("kenneth", Gender::Male),
    ("kevin", Gender::Male),
    ("kimberly", Gender::Female),
    ("kyle", Gender::Male),
    ("larry", Gender::Male),
    ("laura", Gender::Female),
    ("lauren", Gender::Female),
    ("lawrence", Gender::Male),
    ("linda", Gender::Female),
    ("lisa", Gender::Female),
    ("margaret", Gender::Female),
    ("maria", Gender::Female),
    ("marie", Gender::Female),
    ("marilyn", Gender::Female),
    ("mark", Gender::Male),
    ("martha", Gender::Female),
    ("mary", Gender::Female),
    ("matthew", Gender::Male),
    ("megan", Gender::Female),
    ("melissa", Gender::Female),
    ("michael", Gender::Male),
    ("michelle", Gender::Female),
    ("nancy", Gender::Female),
    ("natalie", Gender::Female),
    ("nathan", Gender::Male),
    ("nicholas", Gender::Male),
    ("nicole", Gender::Female),
    ("noah", Gender::Male),
    ("olivia", Gender::Female),
    ("pamela", Gender::Female),
    ("patricia", Gender::Female),
    ("patrick", Gender::Male),
    ("paul", Gender::Male),
    ("peter", Gender::Male),
    ("rachel", Gender::Female),
    ("raymond", Gender::Male),
    ("rebecca", Gender::Female),
    ("richard", Gender::Male),
    ("robert", Gender::Male),
    ("roger", Gender::Male),
    ("ronald", Gender::Male),
    ("ruth", Gender::Female),
    ("ryan", Gender::Male),
    ("samantha", Gender::Female),
    ("samuel", Gender::Male),
    ("sandra", Gender::Female),
    ("sarah", Gender::Female),
    ("scott", Gender::Male),
    ("sean", Gender::Male),
    ("sharon", Gender::Female),
    ("shirley", Gender::Female),
    ("sophia", Gender::Female),
    ("stephanie", Gender::Female),
    ("stephen", Gender::Male),
    ("steven", Gender::Male),
    ("susan", Gender::Female),
    ("teresa", Gender::Female),
    ("terry", Gender::Male),
    ("theresa", Gender::Female),
    ("thomas", Gender::Male),
    ("timothy", Gender::Male),
    ("tyler", Gender::Male),
    ("victoria", Gender::Female),
    ("virginia", Gender::Female),
    ("walter", Gender::Male),
    ("william", Gender::Male),
    ("zachary", Gender::Male),
];

/// Case-insensitive lookup over the embedded name table.
///
/// Constructed explicitly at startup and owned by the resolver, so its
/// lifetime and dependencies are visible rather than hidden in a lazily
/// initialized global.
#[derive(Debug)]
pub struct Detector {
    table: HashMap<&'static str, Gender>,
}

impl Detector {
    pub fn new() -> Self {
        Self {
            table: NAME_TABLE.iter().copied().collect(),
        }
    }

    /// Look up a name. Unlisted names yield `Unknown`.
    pub fn get(&self, name: &str) -> Gender {
        self.table
            .get(name.to_lowercase().as_str())
            .copied()
            .unwrap_or(Gender::Unknown)
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}
