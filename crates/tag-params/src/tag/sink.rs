//! Result-shaping sinks fed one event per completed parameter.
//!
//! The engine is the single source of grammar truth; the two public result
//! shapes differ only in which sink consumed its events.

use hashbrown::hash_map::Entry;

use crate::param::Param;

use super::ParamMap;

/// Consumer of completed parameters, invoked in source order.
pub(crate) trait ParamSink {
    fn accept(&mut self, param: Param);
}

/// Ordered sequence: preserves duplicates and source order.
impl ParamSink for Vec<Param> {
    fn accept(&mut self, param: Param) {
        self.push(param);
    }
}

/// Name-keyed map: the last occurrence of a duplicated name wins.
impl ParamSink for ParamMap {
    fn accept(&mut self, param: Param) {
        let Param { name, args } = param;
        match self.entry(name) {
            Entry::Occupied(mut slot) => {
                log::debug!(
                    "duplicate parameter '{}' overwrites arguments {:?}",
                    slot.key(),
                    slot.get()
                );
                slot.insert(args);
            }
            Entry::Vacant(slot) => {
                slot.insert(args);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_sink_keeps_duplicates_in_order() {
        let mut params: Vec<Param> = Vec::new();
        params.accept(Param::new("a"));
        params.accept(Param::with_args("a", ["1"]));
        assert_eq!(
            params,
            vec![Param::new("a"), Param::with_args("a", ["1"])]
        );
    }

    #[test]
    fn map_sink_lets_last_occurrence_win() {
        let mut map = ParamMap::new();
        map.accept(Param::new("a"));
        map.accept(Param::with_args("a", ["1"]));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a"), Some(&vec!["1".to_string()]));
    }

    #[test]
    fn map_sink_stores_empty_args_for_bare_parameters() {
        let mut map = ParamMap::new();
        map.accept(Param::new("max"));
        assert_eq!(map.get("max"), Some(&Vec::new()));
    }
}
