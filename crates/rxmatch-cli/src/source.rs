//! Interaction data served from a JSON fixture instead of the network.
//!
//! ```json
//! {
//!   "drugs": {
//!     "https://example.test/aspirin.html": [
//!       {
//!         "name": "warfarin",
//!         "url": "https://example.test/aspirin-warfarin.html",
//!         "code": "int_3",
//!         "professional": "…",
//!         "patient": "…"
//!       }
//!     ]
//!   }
//! }
//! ```
//!
//! Lists are keyed by catalog reference. Entries whose `code` is not in the
//! severity table are skipped. A known entry without a description ends the
//! description sequence at that point, as a failed fetch would.

use std::collections::{BTreeMap, HashMap};

use anyhow::anyhow;
use rxmatch_core::InteractionSource;
use rxmatch_model::{CatalogEntry, RawInteractionFragment, SeverityTable};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureFile {
    pub drugs: BTreeMap<String, Vec<FixtureInteraction>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureInteraction {
    pub name: String,
    pub url: String,
    pub code: String,
    #[serde(default)]
    pub professional: Option<String>,
    #[serde(default)]
    pub patient: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FixtureSource {
    lists: BTreeMap<String, Vec<FixtureInteraction>>,
    professional: HashMap<String, String>,
    patient: HashMap<String, String>,
    severity: SeverityTable,
}

impl FixtureSource {
    pub fn new(fixture: FixtureFile, severity: SeverityTable) -> Self {
        let mut professional = HashMap::new();
        let mut patient = HashMap::new();
        for item in fixture.drugs.values().flatten() {
            if let Some(text) = &item.professional {
                professional.insert(item.url.clone(), text.clone());
            }
            if let Some(text) = &item.patient {
                patient.insert(item.url.clone(), text.clone());
            }
        }
        Self {
            lists: fixture.drugs,
            professional,
            patient,
            severity,
        }
    }

    fn descriptions(table: &HashMap<String, String>, knowns: &[&RawInteractionFragment]) -> Vec<String> {
        let found: Vec<String> = knowns
            .iter()
            .map_while(|fragment| table.get(&fragment.reference).cloned())
            .collect();
        if found.len() < knowns.len() {
            debug!(requested = knowns.len(), found = found.len(), "description lookup stopped early");
        }
        found
    }
}

impl InteractionSource for FixtureSource {
    type Error = anyhow::Error;

    fn fragments(&self, entry: &CatalogEntry) -> anyhow::Result<Vec<RawInteractionFragment>> {
        let items = self
            .lists
            .get(&entry.reference)
            .ok_or_else(|| anyhow!("no interaction data for {}", entry.reference))?;
        Ok(items
            .iter()
            .filter_map(|item| self.severity.fragment(&item.name, &item.url, &item.code))
            .collect())
    }

    fn professional_descriptions(
        &self,
        knowns: &[&RawInteractionFragment],
    ) -> anyhow::Result<Vec<String>> {
        Ok(Self::descriptions(&self.professional, knowns))
    }

    fn patient_descriptions(&self, knowns: &[&RawInteractionFragment]) -> anyhow::Result<Vec<String>> {
        Ok(Self::descriptions(&self.patient, knowns))
    }
}
