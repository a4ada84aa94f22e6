//! Known test networks and chain-id helpers.

use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain {
    pub id: u64,
    pub name: &'static str,
    /// Symbol of the gas token, shown in deployment summaries.
    pub gas_token: &'static str,
}

static CHAINS: Lazy<Vec<Chain>> = Lazy::new(|| {
    vec![
        Chain {
            id: 11155111,
            name: "Ethereum Sepolia",
            gas_token: "ETH",
        },
        Chain {
            id: 421614,
            name: "Arbitrum Sepolia",
            gas_token: "ETH",
        },
        Chain {
            id: 84532,
            name: "Base Sepolia",
            gas_token: "ETH",
        },
        Chain {
            id: 11155420,
            name: "Optimism Sepolia",
            gas_token: "ETH",
        },
        Chain {
            id: 80002,
            name: "Polygon Amoy",
            gas_token: "POL",
        },
        Chain {
            id: 43113,
            name: "Avalanche Fuji",
            gas_token: "AVAX",
        },
    ]
});

pub fn lookup(id: u64) -> Option<&'static Chain> {
    CHAINS.iter().find(|chain| chain.id == id)
}

/// Anvil and Hardhat default chain ids.
pub fn is_local(id: u64) -> bool {
    matches!(id, 31337 | 1337)
}

/// Human-readable name for any chain id, known or not.
pub fn describe(id: u64) -> String {
    if is_local(id) {
        return format!("local network ({id})");
    }
    match lookup(id) {
        Some(chain) => format!("{} ({id})", chain.name),
        None => format!("unknown network ({id})"),
    }
}

#[cfg(test)]
mod tests {
    use super::{describe, is_local, lookup};

    #[test]
    fn known_testnets_resolve_by_id() {
        assert_eq!(lookup(11155111).map(|c| c.name), Some("Ethereum Sepolia"));
        assert_eq!(lookup(84532).map(|c| c.name), Some("Base Sepolia"));
        assert_eq!(lookup(43113).map(|c| c.gas_token), Some("AVAX"));
        assert!(lookup(1).is_none());
    }

    #[test]
    fn local_ids_are_recognized() {
        assert!(is_local(31337));
        assert!(is_local(1337));
        assert!(!is_local(11155111));
    }

    #[test]
    fn describe_covers_all_three_shapes() {
        assert_eq!(describe(31337), "local network (31337)");
        assert_eq!(describe(80002), "Polygon Amoy (80002)");
        assert_eq!(describe(99), "unknown network (99)");
    }
}
