pub mod factory;
pub mod mockito;

use crate::TestSetup;

impl TestSetup {
    pub fn roster<'a>(&'a mut self) -> RosterFixtures<'a> {
        RosterFixtures { setup: self }
    }
}

pub struct RosterFixtures<'a> {
    setup: &'a mut TestSetup,
}
