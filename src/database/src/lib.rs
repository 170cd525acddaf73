mod error;
mod loaders;
mod search;

pub use error::*;
pub use loaders::*;
pub use search::*;

use cricket_core::{PitchReport, Roster};

pub struct DatabaseEntity {
    pub rosters: Vec<Roster>,
    pub pitch_report: PitchReport,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> Result<DatabaseEntity, DatabaseError> {
        Ok(DatabaseEntity {
            rosters: RosterLoader::load()?,
            pitch_report: PitchReportLoader::load()?,
        })
    }
}
