use std::sync::OnceLock;

use mac_oui::Oui;
use tracing::debug;

/// Defines the contract for resolving device manufacturers from MAC addresses.
pub trait VendorRepository: Send + Sync {
    /// Retrieves the vendor name for a colon-hex MAC address.
    ///
    /// # Returns
    /// * `Some(String)` - The name of the vendor if found.
    /// * `None` - If the OUI is unknown or the MAC is malformed.
    fn get_vendor(&self, mac: &str) -> Option<String>;
}

static OUI_DB: OnceLock<Option<Oui>> = OnceLock::new();

/// Retrieves or initializes the **Organizationally unique identifier** database.
///
/// A database that fails to load stays unavailable for the rest of the process.
fn get_oui_db() -> Option<&'static Oui> {
    OUI_DB
        .get_or_init(|| match Oui::default() {
            Ok(db) => Some(db),
            Err(_) => {
                debug!("OUI database failed to load, vendor lookup disabled");
                None
            }
        })
        .as_ref()
}

/// Vendor lookup backed by the bundled `mac_oui` database.
pub struct MacOuiRepo;

impl VendorRepository for MacOuiRepo {
    fn get_vendor(&self, mac: &str) -> Option<String> {
        let db = get_oui_db()?;
        match db.lookup_by_mac(mac) {
            Ok(Some(entry)) => Some(entry.company_name.clone()),
            _ => None,
        }
    }
}
