pub mod topology_modal;

pub use topology_modal::TopologyModal;
