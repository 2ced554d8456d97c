use leptos::html::Dialog;
use leptos::prelude::*;
use crate::app::ActiveSession;
use crate::core::console;
use crate::core::services::{Api, RequestGeneration};
use crate::features::topology::layout::{layout, NodeBox, DOT_RADIUS, NODE_HEIGHT, NODE_RADIUS, NODE_WIDTH, VIEW_BOX};
use crate::features::topology::services::load_graph;
use crate::features::topology::state::default_topology;

#[component]
pub fn TopologyModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let api = use_context::<Api>().expect("api client context");
    let active = use_context::<ActiveSession>().expect("active session context");
    let dialog_ref = NodeRef::<Dialog>::new();
    let graph = RwSignal::new(default_topology());
    let generation = RequestGeneration::new();

    // Sync the native dialog with `open` and fetch the graph on each open
    Effect::new(move |_| {
        let is_open = open.get();
        let Some(dialog) = dialog_ref.get() else {
            return;
        };
        if is_open {
            load_graph(api.clone(), generation.begin(), active.id.get_untracked(), graph);
            if !dialog.open() {
                if let Err(e) = dialog.show_modal() {
                    console::error(&format!("Failed to open topology dialog: {:?}", e));
                }
            }
        } else if dialog.open() {
            dialog.close();
        }
    });

    let subtitle = move || {
        let title = active.title.get();
        if active.id.get().is_none() || title.is_empty() {
            "Default pipeline".to_string()
        } else {
            format!("{} pipeline", title)
        }
    };

    let diagram = Memo::new(move |_| graph.with(layout));

    view! {
        // Escape closes the native dialog; report it so `open` stays in sync
        <dialog node_ref=dialog_ref class="modal topology-modal" aria-label="Agent Topology" on:close=move |_| on_close.run(())>
            <div class="modal-content">
                <div class="modal-header">
                    <div>
                        <h2>"Agent Workflow Topology"</h2>
                        <p class="muted">{subtitle}</p>
                    </div>
                    <button class="modal-close" aria-label="Close topology" on:click=move |_| on_close.run(())>"✕"</button>
                </div>

                <div class="topology-canvas">
                    <svg viewBox=VIEW_BOX role="img" aria-label="Agent workflow graph">
                        {move || diagram.with(|d| d.edges.iter().map(|edge| view! {
                            <path
                                d=edge.path.clone()
                                fill="none"
                                class="topology-edge"
                                stroke-width="1.5"
                                stroke-dasharray="6 3"
                            />
                        }).collect::<Vec<_>>())}
                        {move || diagram.with(|d| d.edges.iter().map(|edge| {
                            let (cx, cy) = edge.dot;
                            view! {
                                <circle class="topology-dot" cx=cx.to_string() cy=cy.to_string() r=DOT_RADIUS.to_string() />
                            }
                        }).collect::<Vec<_>>())}
                        {move || diagram.with(|d| d.nodes.iter().cloned().map(|node| view! { <TopologyNode node=node /> }).collect::<Vec<_>>())}
                    </svg>
                </div>

                <div class="topology-legend">
                    <span class="legend-item"><span class="legend-swatch accent"></span>"Entry / Exit"</span>
                    <span class="legend-item"><span class="legend-swatch"></span>"Agent Node"</span>
                    <span class="legend-item"><span class="legend-line"></span>"Data Flow"</span>
                </div>
            </div>
        </dialog>
    }
}

#[component]
fn TopologyNode(node: NodeBox) -> impl IntoView {
    let left = node.left().to_string();
    let top = node.y.to_string();
    let center = node.x.to_string();
    let label_y = (node.y + 22.0).to_string();
    let sublabel_y = (node.y + 38.0).to_string();

    view! {
        <g class="topology-node" class:accent=node.accent>
            <rect
                x=left
                y=top
                width=NODE_WIDTH.to_string()
                height=NODE_HEIGHT.to_string()
                rx=NODE_RADIUS.to_string()
                stroke-width="1"
            />
            <text x=center.clone() y=label_y text-anchor="middle" class="node-label">
                {node.label}
            </text>
            <text x=center y=sublabel_y text-anchor="middle" class="node-sublabel">
                {node.sublabel}
            </text>
        </g>
    }
}
