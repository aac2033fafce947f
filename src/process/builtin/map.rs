use super::{BUILTIN_NAMES, Builtin};
use crate::control_state::ControlFlow;
use crate::input::tokenizer::TokenList;
use crate::process::cd::Cd;
use crate::process::exit::Exit;
use crate::process::help::Help;
use crate::process::sink::Channels;

/// Name to builtin lookup, populated once and read-only afterwards.
pub struct BuiltinMap {
    func_map: Vec<(&'static str, Box<dyn Builtin>)>,
}

impl BuiltinMap {
    pub fn new() -> Self {
        let mut builtin_map = BuiltinMap {
            func_map: Vec::with_capacity(BUILTIN_NAMES.len()),
        };

        builtin_map.add("cd", Box::new(Cd::new()));
        builtin_map.add("help", Box::new(Help::new(Vec::new())));
        builtin_map.add("exit", Box::new(Exit::new()));

        // Help lists whatever ended up registered, itself included.
        let names = builtin_map.names().collect();
        builtin_map.add("help", Box::new(Help::new(names)));
        builtin_map
    }

    // A repeated name replaces the earlier entry so names stay unique.
    fn add(&mut self, func_name: &'static str, func_ptr: Box<dyn Builtin>) {
        match self.func_map.iter_mut().find(|(name, _)| *name == func_name) {
            Some(entry) => entry.1 = func_ptr,
            None => self.func_map.push((func_name, func_ptr)),
        }
    }

    pub fn get(&self, func_name: &str) -> Option<&dyn Builtin> {
        self.func_map
            .iter()
            .find(|(name, _)| *name == func_name)
            .map(|(_, builtin)| builtin.as_ref())
    }

    pub fn contains(&self, func_name: &str) -> bool {
        self.get(func_name).is_some()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.func_map.iter().map(|(name, _)| *name)
    }

    /// Run the named builtin, or return `None` when no builtin has that name.
    pub fn invoke(
        &self,
        func_name: &str,
        tokens: &TokenList<'_>,
        io: &Channels,
    ) -> Option<ControlFlow> {
        self.get(func_name).map(|builtin| builtin.call(tokens, io))
    }

    pub fn len(&self) -> usize {
        self.func_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.func_map.is_empty()
    }
}

impl Default for BuiltinMap {
    fn default() -> Self {
        Self::new()
    }
}
