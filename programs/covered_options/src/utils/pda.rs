pub const REGISTRY_SEED: &[u8] = b"registry";
pub const RECORD_SEED: &[u8] = b"record";
pub const BASE_INDEX_SEED: &[u8] = b"base_index";
pub const QUOTE_INDEX_SEED: &[u8] = b"quote_index";
pub const OPTION_SEED: &[u8] = b"option";
pub const WRITER_LEDGER_SEED: &[u8] = b"writer_ledger";
pub const EXERCISER_LEDGER_SEED: &[u8] = b"exerciser_ledger";
pub const CLAIM_SEED: &[u8] = b"claim";
pub const BASE_VAULT_SEED: &[u8] = b"base_vault";
pub const QUOTE_VAULT_SEED: &[u8] = b"quote_vault";

/// Signer seeds for an OptionInstance PDA, used when releasing custody from its vaults
pub fn option_signer_seeds<'a>(
    registry: &'a [u8],
    id_bytes: &'a [u8; 8],
    bump_bytes: &'a [u8; 1],
) -> [&'a [u8]; 4] {
    [OPTION_SEED, registry, id_bytes, bump_bytes]
}
