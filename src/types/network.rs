use std::collections::{HashMap, HashSet};

use crate::types::edge::eq_up_to_capacity;
use crate::types::{Capacity, Edge, FlowValue};
use crate::FlowError;

/// The synthetic source and sink added to a network, together with the
/// entry and exit nodes they were connected to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualTerminals {
    pub source: String,
    pub sink: String,
    pub entries: Vec<String>,
    pub exits: Vec<String>,
}

/// Named nodes and directed capacitated edges.
///
/// Nodes are kept in first-insertion order; adding an edge registers both
/// of its endpoints. There is at most one edge per ordered pair.
#[derive(Debug, Clone)]
pub struct Network<F> {
    nodes: Vec<String>,
    known: HashSet<String>,
    edges: Vec<Edge<F>>,
    outgoing: HashMap<String, Vec<usize>>,
    terminals: Option<VirtualTerminals>,
}

impl<F: FlowValue> Default for Network<F> {
    fn default() -> Self {
        Network {
            nodes: Vec::new(),
            known: HashSet::new(),
            edges: Vec::new(),
            outgoing: HashMap::new(),
            terminals: None,
        }
    }
}

impl<F: FlowValue> Network<F> {
    pub fn new() -> Network<F> {
        Network::default()
    }

    /// Builds a network from `(from, to, capacity)` triples.
    pub fn from_edges<S, I>(edges: I) -> Result<Network<F>, FlowError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, S, F)>,
    {
        let mut network = Network::new();
        for (from, to, capacity) in edges {
            network.add_edge(from.as_ref(), to.as_ref(), capacity)?;
        }
        Ok(network)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge<F>] {
        &self.edges
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.known.contains(name)
    }

    pub fn terminals(&self) -> Option<&VirtualTerminals> {
        self.terminals.as_ref()
    }

    /// Registers a node without edges. Returns false if it already exists.
    pub fn add_node(&mut self, name: &str) -> bool {
        if self.known.contains(name) {
            return false;
        }
        self.known.insert(name.to_string());
        self.nodes.push(name.to_string());
        true
    }

    /// Inserts the edge or overwrites the capacity of an existing one.
    pub fn add_edge(&mut self, from: &str, to: &str, capacity: F) -> Result<(), FlowError> {
        self.add_capacity_edge(from, to, Capacity::Finite(capacity))
    }

    /// Like `add_edge`, but also accepts an unbounded capacity.
    pub fn add_capacity_edge(
        &mut self,
        from: &str,
        to: &str,
        capacity: Capacity<F>,
    ) -> Result<(), FlowError> {
        if !capacity.is_valid() {
            return Err(FlowError::InvalidCapacity {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        if let Some(terminals) = &self.terminals {
            if to == terminals.source || from == terminals.sink {
                return Err(FlowError::VirtualTerminalEdge {
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
        }
        self.update(Edge {
            from: from.to_string(),
            to: to.to_string(),
            capacity,
        });
        Ok(())
    }

    pub fn capacity(&self, from: &str, to: &str) -> Option<Capacity<F>> {
        self.outgoing(from)
            .into_iter()
            .find(|e| e.to == to)
            .map(|e| e.capacity)
    }

    pub fn outgoing(&self, source: &str) -> Vec<&Edge<F>> {
        match self.outgoing.get(source) {
            Some(out) => out.iter().filter_map(|i| self.edges.get(*i)).collect(),
            None => vec![],
        }
    }

    /// Adds a virtual source connected to every entry node and a virtual
    /// sink reached from every exit node, all with unbounded capacity.
    ///
    /// All checks run before the network is touched, so on error it is
    /// left unmodified. Entry and exit nodes that are not known yet are
    /// registered.
    pub fn augment_with_virtual_terminals<S: AsRef<str>>(
        &mut self,
        entries: &[S],
        exits: &[S],
        source_name: &str,
        sink_name: &str,
    ) -> Result<VirtualTerminals, FlowError> {
        if self.terminals.is_some() {
            return Err(FlowError::AlreadyAugmented);
        }
        if source_name == sink_name {
            return Err(FlowError::DuplicateNodeName(sink_name.to_string()));
        }
        for name in [source_name, sink_name] {
            let named_as_role = entries
                .iter()
                .chain(exits.iter())
                .any(|n| n.as_ref() == name);
            if self.contains_node(name) || named_as_role {
                return Err(FlowError::DuplicateNodeName(name.to_string()));
            }
        }

        self.add_node(source_name);
        for entry in entries {
            self.add_node(entry.as_ref());
            self.update(Edge {
                from: source_name.to_string(),
                to: entry.as_ref().to_string(),
                capacity: Capacity::Unbounded,
            });
        }
        for exit in exits {
            self.add_node(exit.as_ref());
        }
        self.add_node(sink_name);
        for exit in exits {
            self.update(Edge {
                from: exit.as_ref().to_string(),
                to: sink_name.to_string(),
                capacity: Capacity::Unbounded,
            });
        }

        let terminals = VirtualTerminals {
            source: source_name.to_string(),
            sink: sink_name.to_string(),
            entries: entries.iter().map(|n| n.as_ref().to_string()).collect(),
            exits: exits.iter().map(|n| n.as_ref().to_string()).collect(),
        };
        self.terminals = Some(terminals.clone());
        Ok(terminals)
    }

    fn update(&mut self, update: Edge<F>) {
        match self.index_of(&update) {
            Some(i) => self.edges[i].capacity = update.capacity,
            None => {
                self.add_node(&update.from);
                self.add_node(&update.to);
                let i = self.edges.len();
                self.outgoing.entry(update.from.clone()).or_default().push(i);
                self.edges.push(update);
            }
        }
    }

    fn index_of(&self, e: &Edge<F>) -> Option<usize> {
        self.outgoing.get(&e.from).and_then(|out| {
            out.iter()
                .copied()
                .find(|i| eq_up_to_capacity(&self.edges[*i], e))
        })
    }
}
