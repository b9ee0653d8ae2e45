use indexmap::IndexMap;
use tracing::trace;

use crate::{
    config::DiagramConfig,
    model::{fold_identifier, ColumnInfo, DiagramData, JoinRelationship, TableInfo},
};

/// State shared by the extraction passes of one parse.
///
/// `aliases` maps every registered alias, folded to lower case, to the index of
/// its table. Later passes find tables through it, which is why the passes
/// must run in order.
pub struct ParseContext<'a> {
    pub config: &'a DiagramConfig,
    data: DiagramData,
    aliases: IndexMap<String, usize>,
}

impl<'a> ParseContext<'a> {
    pub fn new(config: &'a DiagramConfig) -> Self {
        Self {
            config,
            data: DiagramData::default(),
            aliases: IndexMap::new(),
        }
    }

    pub fn is_known_alias(&self, alias: &str) -> bool {
        self.aliases.contains_key(&fold_identifier(alias))
    }

    /// Adds a table at the next cascade position unless the alias is taken.
    pub fn register_table(&mut self, name: &str, alias: &str) -> bool {
        if self.is_known_alias(alias) {
            trace!(alias, "alias already registered");
            return false;
        }

        let index = self.data.tables.len();
        let (x, y) = self.config.position_of(index);
        trace!(name, alias, x, y, "register table");

        self.data.tables.push(TableInfo::new(name, alias, x, y));
        self.aliases.insert(fold_identifier(alias), index);
        true
    }

    pub fn table_mut(&mut self, alias: &str) -> Option<&mut TableInfo> {
        let index = *self.aliases.get(&fold_identifier(alias))?;
        self.data.tables.get_mut(index)
    }

    pub fn add_join(&mut self, join: JoinRelationship) {
        trace!(
            from = %join.from_table, to = %join.to_table, join_type = %join.join_type,
            "record join"
        );
        self.data.joins.push(join);
    }

    /// Adds the key column of both sides of every join to its table, unless
    /// the table already has it. Returns how many columns were added.
    pub fn backfill_join_keys(&mut self) -> usize {
        let mut added = 0;
        for join in self.data.joins.iter() {
            let sides = [
                (&join.from_table, &join.from_column),
                (&join.to_table, &join.to_column),
            ];
            for (alias, column) in sides {
                let Some(index) = self.aliases.get(&fold_identifier(alias)) else {
                    continue;
                };
                if let Some(table) = self.data.tables.get_mut(*index) {
                    if table.add_column(ColumnInfo::new(column)) {
                        added += 1;
                    }
                }
            }
        }
        added
    }

    /// Gives every table without columns a `<name><suffix>` placeholder.
    pub fn fill_empty_tables(&mut self) -> usize {
        let mut filled = 0;
        for table in self.data.tables.iter_mut().filter(|table| table.columns.is_empty()) {
            let placeholder = self.config.placeholder_column(&table.name);
            table.columns.push(ColumnInfo::new(&placeholder));
            filled += 1;
        }
        filled
    }

    pub fn table_count(&self) -> usize {
        self.data.tables.len()
    }

    pub fn join_count(&self) -> usize {
        self.data.joins.len()
    }

    pub fn into_data(self) -> DiagramData {
        self.data
    }
}
