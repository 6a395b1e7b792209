//! Static fixture data standing in for the managed device
//!
//! Two read-only mappings, one per protocol: a sample MIB keyed by OID
//! (RFC 1213 subset) and a set of NETCONF datastores keyed by name. Absence
//! of a key is a normal case, reported as `None` and turned into the
//! protocol's sentinel string further up.

use std::collections::HashMap;

/// OID queried by the default run (sysUpTime).
pub const DEFAULT_OID: &str = "1.3.6.1.2.1.1.3.0";

/// Datastore retrieved when the caller does not name one.
pub const DEFAULT_DATASTORE: &str = "running-config";

const RUNNING_CONFIG: &str = "\
interface GigabitEthernet0/1
 ip address 192.168.1.1 255.255.255.0
 no shutdown
interface GigabitEthernet0/2
 ip address 10.0.0.1 255.255.255.0
 shutdown";

const STARTUP_CONFIG: &str = "\
interface GigabitEthernet0/1
 ip address 192.168.1.1 255.255.255.0
 no shutdown";

const CANDIDATE_CONFIG: &str = "\
interface GigabitEthernet0/1
 ip address 192.168.1.2 255.255.255.0
 no shutdown";

/// Read-only world state for both simulated protocols.
pub struct FixtureStore {
    mib_objects: HashMap<&'static str, &'static str>,
    datastores: HashMap<&'static str, &'static str>,
}

impl FixtureStore {
    pub fn new() -> Self {
        let mib_objects = HashMap::from([
            ("1.3.6.1.2.1.1.1.0", "Simulated Router, IOS-like Software, Version 15.2"),
            ("1.3.6.1.2.1.1.3.0", "System Uptime: 15234 seconds"),
            ("1.3.6.1.2.1.2.1.0", "4"),
            ("1.3.6.1.2.1.2.2.1.2", "GigabitEthernet0/1"),
        ]);
        let datastores = HashMap::from([
            ("running-config", RUNNING_CONFIG),
            ("startup-config", STARTUP_CONFIG),
            ("candidate-config", CANDIDATE_CONFIG),
        ]);
        Self {
            mib_objects,
            datastores,
        }
    }

    /// Look up an OID in the SNMP mapping.
    pub fn mib_object(&self, oid: &str) -> Option<&'static str> {
        self.mib_objects.get(oid).copied()
    }

    /// Look up a datastore in the NETCONF mapping.
    pub fn datastore(&self, name: &str) -> Option<&'static str> {
        self.datastores.get(name).copied()
    }

    /// All fixture OIDs, in walk order.
    pub fn oids(&self) -> Vec<&'static str> {
        let mut oids: Vec<&'static str> = self.mib_objects.keys().copied().collect();
        oids.sort_unstable();
        oids
    }
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new()
    }
}
