use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::utils::pda::{BASE_INDEX_SEED, QUOTE_INDEX_SEED};
use crate::utils::validation::MAX_SYMBOL_LEN;

/// Most records returned by one paged symbol query (program return data is
/// capped at 1024 bytes)
pub const MAX_RECORDS_PER_PAGE: usize = 4;

/// Factory state: hands out sequential option ids
///
/// PDA Seeds: "registry"
#[account]
#[derive(InitSpace)]
pub struct Registry {
    pub authority: Pubkey,
    pub count: u64,
    pub bump: u8,
}

impl Registry {
    /// Assigns the next id and advances the counter
    pub fn next_id(&mut self) -> Result<u64> {
        let id = self.count;
        self.count = self.count.checked_add(1).ok_or(ErrorCode::MathOverflow)?;
        Ok(id)
    }

    pub fn check_id(&self, id: u64) -> Result<()> {
        require!(id < self.count, ErrorCode::NotFound);
        Ok(())
    }
}

/// Immutable registry entry for one option instance
///
/// PDA Seeds: "record", registry, id (little endian)
#[account]
#[derive(InitSpace, Debug)]
pub struct OptionRecord {
    pub registry: Pubkey,
    pub id: u64,
    pub instance: Pubkey,
    pub base_mint: Pubkey,
    pub quote_mint: Pubkey,
    #[max_len(10)]
    pub base_symbol: String,
    #[max_len(10)]
    pub quote_symbol: String,
    pub conversion_rate: u128,
    pub expiration_time: i64,
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexSide {
    Base,
    Quote,
}

impl IndexSide {
    pub fn seed(&self) -> &'static [u8] {
        match self {
            IndexSide::Base => BASE_INDEX_SEED,
            IndexSide::Quote => QUOTE_INDEX_SEED,
        }
    }

    pub fn symbol_of<'a>(&self, record: &'a OptionRecord) -> &'a str {
        match self {
            IndexSide::Base => &record.base_symbol,
            IndexSide::Quote => &record.quote_symbol,
        }
    }
}

/// Option ids sharing one base (or quote) symbol, in creation order
///
/// PDA Seeds: "base_index" | "quote_index", symbol
///
/// Grows by one id per indexed option; the account is reallocated on append.
#[account]
pub struct SymbolIndex {
    pub side: IndexSide,
    pub symbol: String,
    pub ids: Vec<u64>,
    pub bump: u8,
}

impl SymbolIndex {
    /// Account size (with discriminator) holding `len` ids
    pub fn space(len: usize) -> usize {
        8 + 1 + (4 + MAX_SYMBOL_LEN) + (4 + 8 * len) + 1
    }

    /// Index PDA for a symbol, or `None` for symbols no index can exist for
    pub fn address(side: IndexSide, symbol: &str) -> Option<Pubkey> {
        if symbol.len() > MAX_SYMBOL_LEN {
            return None;
        }
        Pubkey::try_find_program_address(&[side.seed(), symbol.as_bytes()], &crate::ID)
            .map(|(address, _)| address)
    }

    pub fn new(side: IndexSide, symbol: &str, bump: u8) -> SymbolIndex {
        SymbolIndex { side, symbol: symbol.to_string(), ids: Vec::new(), bump }
    }

    pub fn append(&mut self, id: u64) -> Result<()> {
        if let Some(last) = self.ids.last() {
            require!(id > *last, ErrorCode::IndexMismatch);
        }
        self.ids.push(id);
        Ok(())
    }

    /// Checks that `records` are exactly the indexed options starting at
    /// `offset`, and returns them in creation order
    pub fn page(&self, offset: usize, records: &[OptionRecord]) -> Result<Vec<OptionRecord>> {
        require!(records.len() <= MAX_RECORDS_PER_PAGE, ErrorCode::PageTooLarge);
        require!(offset <= self.ids.len(), ErrorCode::NotFound);
        require!(offset + records.len() <= self.ids.len(), ErrorCode::IndexMismatch);

        for (record, id) in records.iter().zip(&self.ids[offset..]) {
            require!(record.id == *id, ErrorCode::IndexMismatch);
            require!(self.side.symbol_of(record) == self.symbol, ErrorCode::IndexMismatch);
        }
        Ok(records.to_vec())
    }
}

/// Records for a symbol page; an unknown symbol has no index and yields nothing
pub fn records_for_symbol(
    index: Option<&SymbolIndex>,
    offset: usize,
    records: &[OptionRecord],
) -> Result<Vec<OptionRecord>> {
    match index {
        Some(index) => index.page(offset, records),
        None => {
            require!(offset == 0 && records.is_empty(), ErrorCode::IndexMismatch);
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::assert_error;
    use crate::utils::math::RATE_SCALE;
    use std::collections::BTreeMap;

    /// Registry plus its indexes, updated the way `create_option` updates them
    struct Factory {
        registry: Registry,
        records: Vec<OptionRecord>,
        base_index: BTreeMap<String, SymbolIndex>,
        quote_index: BTreeMap<String, SymbolIndex>,
    }

    impl Factory {
        fn new() -> Factory {
            Factory {
                registry: Registry { authority: Pubkey::new_unique(), count: 0, bump: 255 },
                records: Vec::new(),
                base_index: BTreeMap::new(),
                quote_index: BTreeMap::new(),
            }
        }

        fn create(&mut self, base: &str, quote: &str, expiration_time: i64) -> u64 {
            let id = self.registry.next_id().unwrap();
            self.records.push(OptionRecord {
                registry: Pubkey::default(),
                id,
                instance: Pubkey::new_unique(),
                base_mint: Pubkey::new_unique(),
                quote_mint: Pubkey::new_unique(),
                base_symbol: base.to_string(),
                quote_symbol: quote.to_string(),
                conversion_rate: RATE_SCALE,
                expiration_time,
                bump: 0,
            });
            self.base_index
                .entry(base.to_string())
                .or_insert_with(|| SymbolIndex::new(IndexSide::Base, base, 0))
                .append(id)
                .unwrap();
            self.quote_index
                .entry(quote.to_string())
                .or_insert_with(|| SymbolIndex::new(IndexSide::Quote, quote, 0))
                .append(id)
                .unwrap();
            id
        }

        fn info_at(&self, id: u64) -> Result<&OptionRecord> {
            self.registry.check_id(id)?;
            Ok(&self.records[id as usize])
        }

        /// Walks every page the way a client would
        fn by_symbol(&self, side: IndexSide, symbol: &str) -> Vec<OptionRecord> {
            let index = match side {
                IndexSide::Base => self.base_index.get(symbol),
                IndexSide::Quote => self.quote_index.get(symbol),
            };
            let ids: Vec<u64> = index.map(|i| i.ids.clone()).unwrap_or_default();
            let mut out = Vec::new();
            for (page, chunk) in ids.chunks(MAX_RECORDS_PER_PAGE).enumerate() {
                let records: Vec<OptionRecord> =
                    chunk.iter().map(|id| self.records[*id as usize].clone()).collect();
                out.extend(records_for_symbol(index, page * MAX_RECORDS_PER_PAGE, &records).unwrap());
            }
            if ids.is_empty() {
                out.extend(records_for_symbol(index, 0, &[]).unwrap());
            }
            out
        }
    }

    #[test]
    fn ids_are_sequential_and_count_grows() {
        let mut factory = Factory::new();
        assert_eq!(factory.registry.count, 0);
        assert_eq!(factory.create("BASE", "QUOTE", 100), 0);
        assert_eq!(factory.create("BASE", "QUOTE", 100), 1);
        assert_eq!(factory.registry.count, 2);
    }

    #[test]
    fn info_at_returns_the_record_or_not_found() {
        let mut factory = Factory::new();
        factory.create("BASE", "QUOTE", 1_800_000_000);

        let info = factory.info_at(0).unwrap();
        assert_eq!(info.base_symbol, "BASE");
        assert_eq!(info.quote_symbol, "QUOTE");
        assert_eq!(info.conversion_rate, RATE_SCALE);
        assert_eq!(info.expiration_time, 1_800_000_000);

        assert_error(factory.info_at(1), ErrorCode::NotFound);
    }

    #[test]
    fn symbol_queries_follow_creation_order() {
        let mut factory = Factory::new();
        let symbols = ["DAI", "WETH", "WBTC", "USDC", "DAI", "WETH", "DAI"];
        for (i, base) in symbols.iter().enumerate() {
            factory.create(base, "USDC", 1_000 + i as i64);
        }
        assert_eq!(factory.registry.count, symbols.len() as u64);

        let dai = factory.by_symbol(IndexSide::Base, "DAI");
        assert_eq!(dai.iter().map(|r| r.id).collect::<Vec<_>>(), vec![0, 4, 6]);
        assert!(dai.iter().all(|r| r.base_symbol == "DAI"));

        assert_eq!(factory.by_symbol(IndexSide::Quote, "USDC").len(), symbols.len());
        assert!(factory.by_symbol(IndexSide::Base, "SOL").is_empty());
    }

    #[test]
    fn base_and_quote_indexes_are_separate() {
        let mut factory = Factory::new();
        factory.create("BASE", "QUOTE", 100);
        factory.create("QUOTE", "BASE", 100);

        let by_base = factory.by_symbol(IndexSide::Base, "BASE");
        assert_eq!(by_base.len(), 1);
        assert_eq!(by_base[0].base_symbol, "BASE");

        let by_quote = factory.by_symbol(IndexSide::Quote, "QUOTE");
        assert_eq!(by_quote.len(), 1);
        assert_eq!(by_quote[0].quote_symbol, "QUOTE");
    }

    #[test]
    fn duplicate_series_are_indexed_separately() {
        let mut factory = Factory::new();
        factory.create("BASE", "QUOTE", 100);
        factory.create("BASE", "QUOTE", 100);
        assert_eq!(factory.by_symbol(IndexSide::Base, "BASE").len(), 2);
    }

    #[test]
    fn pages_must_match_the_index() {
        let mut factory = Factory::new();
        factory.create("BASE", "QUOTE", 100);
        factory.create("OTHER", "QUOTE", 100);
        factory.create("BASE", "QUOTE", 100);
        let index = &factory.base_index["BASE"];

        // wrong record for the slot
        let wrong = vec![factory.records[1].clone()];
        assert_error(index.page(0, &wrong), ErrorCode::IndexMismatch);

        // right ids, out of order
        let swapped = vec![factory.records[2].clone(), factory.records[0].clone()];
        assert_error(index.page(0, &swapped), ErrorCode::IndexMismatch);

        // past the end
        assert_error(index.page(3, &[]), ErrorCode::NotFound);
        let second = vec![factory.records[2].clone()];
        assert_eq!(index.page(1, &second).unwrap()[0].id, 2);
        assert_error(index.page(2, &second), ErrorCode::IndexMismatch);

        let too_many = vec![factory.records[0].clone(); MAX_RECORDS_PER_PAGE + 1];
        assert_error(index.page(0, &too_many), ErrorCode::PageTooLarge);
    }

    #[test]
    fn append_keeps_creation_order() {
        let mut index = SymbolIndex::new(IndexSide::Base, "BASE", 0);
        index.append(3).unwrap();
        assert_error(index.append(3), ErrorCode::IndexMismatch);
        assert_error(index.append(1), ErrorCode::IndexMismatch);
        index.append(7).unwrap();
        assert_eq!(index.ids, vec![3, 7]);
    }

    #[test]
    fn index_space_tracks_serialized_size() {
        let mut index = SymbolIndex::new(IndexSide::Quote, "ABCDEFGHIJ", 0);
        for id in 0..5 {
            index.append(id).unwrap();
        }
        let mut data = Vec::new();
        index.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), SymbolIndex::space(5));
    }

    #[test]
    fn index_address_is_none_for_oversized_symbols() {
        let (expected, _) =
            Pubkey::find_program_address(&[BASE_INDEX_SEED, b"BASE"], &crate::ID);
        assert_eq!(SymbolIndex::address(IndexSide::Base, "BASE"), Some(expected));
        assert_ne!(
            SymbolIndex::address(IndexSide::Quote, "BASE"),
            SymbolIndex::address(IndexSide::Base, "BASE")
        );

        assert_eq!(SymbolIndex::address(IndexSide::Base, "ABCDEFGHIJK"), None);
        assert_eq!(SymbolIndex::address(IndexSide::Quote, &"A".repeat(33)), None);
    }

    #[test]
    fn unknown_symbol_pages_are_empty() {
        assert!(records_for_symbol(None, 0, &[]).unwrap().is_empty());
        assert_error(records_for_symbol(None, 1, &[]), ErrorCode::IndexMismatch);
    }
}
