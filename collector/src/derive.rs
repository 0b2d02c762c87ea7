//! Join validators with signing infos and derive the per-validator series.

use std::collections::HashMap;

use stakescope_types::{
    BondStatus, ConsAddrError, SigningInfoRecord, StakingParams, ValidatorRecord,
};

use crate::schema;
use crate::snapshot::Snapshot;
use crate::CollectorConfig;

/// Emit every validator-scoped series into `snapshot`.
///
/// Each derivation step can fail for one validator or one field without
/// affecting any other series: a failed decimal parse or consensus-address
/// derivation is logged and omits exactly the series that depended on it.
pub(crate) fn derive_validator_series(
    snapshot: &mut Snapshot,
    validators: Vec<ValidatorRecord>,
    signing_infos: &[SigningInfoRecord],
    staking_params: Option<StakingParams>,
    config: &CollectorConfig,
) {
    // Rank by descending delegator shares; the sort is stable, so validators
    // with equal shares keep their fetch order. Shares that fail to parse
    // rank as zero (the shares series itself is omitted further down).
    let mut keyed: Vec<(f64, ValidatorRecord)> = validators
        .into_iter()
        .map(|v| (v.delegator_shares.to_f64().unwrap_or(0.0), v))
        .collect();
    keyed.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    // Index signing infos by consensus address once; the first record wins
    // on a duplicate key.
    let mut missed_by_addr: HashMap<&str, i64> = HashMap::new();
    for info in signing_infos {
        missed_by_addr
            .entry(info.address.as_str())
            .or_insert(info.missed_blocks);
    }

    // A zero-sized active set means the params fetch failed or the chain is
    // misconfigured; either way the active-set series is withheld.
    let max_validators = staking_params
        .map(|p| p.max_validators)
        .filter(|max| *max != 0);

    for (index, (_, validator)) in keyed.iter().enumerate() {
        let rank = index + 1;
        let address = validator.operator_address.as_str();
        let moniker = validator.moniker.as_str();
        let base = vec![address.to_string(), moniker.to_string()];
        let denom = vec![
            address.to_string(),
            moniker.to_string(),
            config.denom.clone(),
        ];

        match validator.commission_rate.to_f64() {
            Ok(rate) => snapshot.push(&schema::VALIDATORS_COMMISSION, base.clone(), rate),
            Err(error) => tracing::error!(%error, address, "could not parse commission rate"),
        }

        snapshot.push(&schema::VALIDATORS_STATUS, base.clone(), validator.status.code());
        snapshot.push(
            &schema::VALIDATORS_JAILED,
            base.clone(),
            if validator.jailed { 1.0 } else { 0.0 },
        );

        match validator.tokens.to_f64_scaled(config.denom_coefficient) {
            Ok(value) => snapshot.push(&schema::VALIDATORS_TOKENS, denom.clone(), value),
            Err(error) => tracing::error!(%error, address, "could not parse validator tokens"),
        }

        match validator
            .delegator_shares
            .to_f64_scaled(config.denom_coefficient)
        {
            Ok(value) => snapshot.push(&schema::VALIDATORS_DELEGATOR_SHARES, denom.clone(), value),
            Err(error) => tracing::error!(%error, address, "could not parse delegator shares"),
        }

        match validator
            .min_self_delegation
            .to_f64_scaled(config.denom_coefficient)
        {
            Ok(value) => snapshot.push(&schema::VALIDATORS_MIN_SELF_DELEGATION, denom, value),
            Err(error) => {
                tracing::error!(%error, address, "could not parse min self delegation")
            }
        }

        // A failed consensus-address derivation means no correlation is
        // possible for this validator; only the missed-blocks series is
        // affected.
        let consensus_address = validator
            .consensus_pubkey
            .as_ref()
            .ok_or(ConsAddrError::MissingPubkey)
            .and_then(|pubkey| pubkey.consensus_address(&config.valcons_prefix));
        let missed_blocks = match consensus_address {
            Ok(consensus_address) => missed_by_addr.get(consensus_address.as_str()).copied(),
            Err(error) => {
                tracing::error!(%error, address, "could not derive consensus address");
                None
            }
        };

        match missed_blocks {
            Some(missed) if validator.status == BondStatus::Bonded => {
                snapshot.push(&schema::VALIDATORS_MISSED_BLOCKS, base.clone(), missed as f64);
            }
            Some(_) => {
                tracing::trace!(address, "validator is not bonded, withholding missed blocks")
            }
            None => tracing::debug!(address, "no signing info for validator"),
        }

        snapshot.push(&schema::VALIDATORS_RANK, base.clone(), rank as f64);

        if let Some(max) = max_validators {
            let active = if rank as u64 <= u64::from(max) { 1.0 } else { 0.0 };
            snapshot.push(&schema::VALIDATORS_ACTIVE, base, active);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use stakescope_types::{ConsensusPubkey, Dec};

    fn test_config() -> CollectorConfig {
        CollectorConfig {
            page_limit: 1000,
            denom: "atom".to_string(),
            denom_coefficient: 1.0,
            valcons_prefix: "cosmosvalcons".to_string(),
        }
    }

    fn validator(address: &str, shares: &str, key_byte: u8) -> ValidatorRecord {
        ValidatorRecord {
            operator_address: address.to_string(),
            moniker: format!("{address}-moniker"),
            status: BondStatus::Bonded,
            jailed: false,
            commission_rate: Dec::new("0.1"),
            tokens: Dec::new(shares),
            delegator_shares: Dec::new(shares),
            min_self_delegation: Dec::new("1"),
            consensus_pubkey: Some(ConsensusPubkey::new(
                "/cosmos.crypto.ed25519.PubKey",
                base64::engine::general_purpose::STANDARD.encode([key_byte; 32]),
            )),
        }
    }

    fn values_of(snapshot: &Snapshot, metric: &str) -> Vec<(String, f64)> {
        snapshot
            .series()
            .iter()
            .filter(|s| s.name == metric)
            .map(|s| (s.labels[0].clone(), s.value))
            .collect()
    }

    #[test]
    fn rank_follows_descending_shares() {
        let mut snapshot = Snapshot::new();
        let validators = vec![
            validator("val-low", "10", 1),
            validator("val-high", "300", 2),
            validator("val-mid", "200", 3),
        ];
        derive_validator_series(&mut snapshot, validators, &[], None, &test_config());

        let ranks = values_of(&snapshot, "cosmos_validators_rank");
        assert_eq!(
            ranks,
            vec![
                ("val-high".to_string(), 1.0),
                ("val-mid".to_string(), 2.0),
                ("val-low".to_string(), 3.0),
            ]
        );
    }

    #[test]
    fn equal_shares_keep_fetch_order() {
        let mut snapshot = Snapshot::new();
        let validators = vec![
            validator("first", "100", 1),
            validator("second", "100", 2),
            validator("third", "100", 3),
        ];
        derive_validator_series(&mut snapshot, validators, &[], None, &test_config());

        let ranks = values_of(&snapshot, "cosmos_validators_rank");
        assert_eq!(
            ranks,
            vec![
                ("first".to_string(), 1.0),
                ("second".to_string(), 2.0),
                ("third".to_string(), 3.0),
            ]
        );
    }

    #[test]
    fn unparseable_shares_rank_last_and_omit_shares_series() {
        let mut snapshot = Snapshot::new();
        let validators = vec![
            validator("broken", "garbage", 1),
            validator("healthy", "50", 2),
        ];
        derive_validator_series(&mut snapshot, validators, &[], None, &test_config());

        let ranks = values_of(&snapshot, "cosmos_validators_rank");
        assert_eq!(
            ranks,
            vec![("healthy".to_string(), 1.0), ("broken".to_string(), 2.0)]
        );

        let shares = values_of(&snapshot, "cosmos_validators_delegator_shares");
        assert_eq!(shares, vec![("healthy".to_string(), 50.0)]);

        // Every other series of the broken validator is unaffected.
        let statuses = values_of(&snapshot, "cosmos_validators_status");
        assert_eq!(statuses.len(), 2);
    }

    #[test]
    fn duplicate_signing_addresses_first_record_wins() {
        let config = test_config();
        let v = validator("val", "100", 7);
        let consensus_address = v
            .consensus_pubkey
            .as_ref()
            .unwrap()
            .consensus_address(&config.valcons_prefix)
            .unwrap();

        let signing_infos = vec![
            SigningInfoRecord {
                address: consensus_address.clone(),
                missed_blocks: 3,
            },
            SigningInfoRecord {
                address: consensus_address,
                missed_blocks: 999,
            },
        ];

        let mut snapshot = Snapshot::new();
        derive_validator_series(&mut snapshot, vec![v], &signing_infos, None, &config);

        let missed = values_of(&snapshot, "cosmos_validators_missed_blocks");
        assert_eq!(missed, vec![("val".to_string(), 3.0)]);
    }

    #[test]
    fn active_set_respects_max_validators() {
        let mut snapshot = Snapshot::new();
        let validators = vec![
            validator("a", "300", 1),
            validator("b", "200", 2),
            validator("c", "100", 3),
        ];
        derive_validator_series(
            &mut snapshot,
            validators,
            &[],
            Some(StakingParams { max_validators: 2 }),
            &test_config(),
        );

        let active = values_of(&snapshot, "cosmos_validators_active");
        assert_eq!(
            active,
            vec![
                ("a".to_string(), 1.0),
                ("b".to_string(), 1.0),
                ("c".to_string(), 0.0),
            ]
        );
    }

    #[test]
    fn zero_max_validators_withholds_active_series() {
        let mut snapshot = Snapshot::new();
        derive_validator_series(
            &mut snapshot,
            vec![validator("a", "1", 1)],
            &[],
            Some(StakingParams { max_validators: 0 }),
            &test_config(),
        );
        assert!(values_of(&snapshot, "cosmos_validators_active").is_empty());
    }

    #[test]
    fn missing_pubkey_only_affects_missed_blocks() {
        let config = test_config();
        let mut v = validator("no-key", "10", 1);
        v.consensus_pubkey = None;

        let mut snapshot = Snapshot::new();
        derive_validator_series(
            &mut snapshot,
            vec![v],
            &[],
            Some(StakingParams { max_validators: 10 }),
            &config,
        );

        assert!(values_of(&snapshot, "cosmos_validators_missed_blocks").is_empty());
        assert_eq!(values_of(&snapshot, "cosmos_validators_rank").len(), 1);
        assert_eq!(values_of(&snapshot, "cosmos_validators_active").len(), 1);
        assert_eq!(values_of(&snapshot, "cosmos_validators_status").len(), 1);
    }

    #[test]
    fn denom_scaling_applies_to_amounts_but_not_commission() {
        let mut config = test_config();
        config.denom_coefficient = 1_000_000.0;

        let mut snapshot = Snapshot::new();
        let mut v = validator("val", "2000000", 1);
        v.commission_rate = Dec::new("0.25");
        derive_validator_series(&mut snapshot, vec![v], &[], None, &config);

        assert_eq!(
            values_of(&snapshot, "cosmos_validators_tokens"),
            vec![("val".to_string(), 2.0)]
        );
        assert_eq!(
            values_of(&snapshot, "cosmos_validators_commission"),
            vec![("val".to_string(), 0.25)]
        );
    }
}
