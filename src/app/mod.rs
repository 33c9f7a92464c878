use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Context, Pos2, Vec2};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::dataset::{ClassGraph, load_class_graph};

use self::legend::Legend;
use self::scene::{ClusterPoint, Edge, Node};
use self::ui::TextLabel;
use self::viewport::Viewport;

mod graph;
mod input;
mod legend;
mod render_utils;
mod scene;
mod ui;
mod viewport;

pub struct ClusterCanvasApp {
    data_path: PathBuf,
    seed: Option<u64>,
    state: AppState,
}

enum AppState {
    Loading {
        rx: Receiver<Result<ClassGraph, String>>,
    },
    Placing(Box<ClassGraph>),
    Ready(Box<Session>),
    Error(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Interaction {
    Idle,
    Dragging(usize),
    Panning,
    AnimatingTo(ClusterPoint),
}

struct StatCounters {
    clusters: usize,
    classes: usize,
    edges: usize,
}

struct Session {
    /// `nodes[id - 1]` holds node `id`.
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    /// `cluster_points[id - 1]` anchors cluster `id`.
    cluster_points: Vec<ClusterPoint>,
    legend: Legend,
    viewport: Viewport,
    interaction: Interaction,
    clicked_node: Option<usize>,
    previous_pointer: Pos2,
    canvas_size: Vec2,
    node_text: TextLabel,
    stats: StatCounters,
    search: String,
}

impl ClusterCanvasApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, data_path: PathBuf, seed: Option<u64>) -> Self {
        let state = Self::start_load(data_path.clone());
        Self {
            data_path,
            seed,
            state,
        }
    }

    fn spawn_load(data_path: PathBuf) -> Receiver<Result<ClassGraph, String>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = load_class_graph(&data_path).map_err(|error| format!("{error:#}"));
            let _ = tx.send(result);
        });

        rx
    }

    fn start_load(data_path: PathBuf) -> AppState {
        AppState::Loading {
            rx: Self::spawn_load(data_path),
        }
    }
}

fn poll_load(rx: &Receiver<Result<ClassGraph, String>>) -> Option<AppState> {
    match rx.try_recv() {
        Ok(Ok(graph)) => Some(AppState::Placing(Box::new(graph))),
        Ok(Err(error)) => Some(AppState::Error(error)),
        Err(TryRecvError::Empty) => None,
        Err(TryRecvError::Disconnected) => Some(AppState::Error(
            "Background load worker disconnected".to_owned(),
        )),
    }
}

fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

impl eframe::App for ClusterCanvasApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                transition = poll_load(rx);

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading class graph...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Placing(graph) => {
                egui::CentralPanel::default()
                    .frame(egui::Frame::NONE)
                    .show(ctx, |ui| {
                        let canvas_size = ui.available_size();
                        let mut rng = session_rng(self.seed);
                        let session = Session::new(graph, canvas_size, &mut rng);
                        info!(
                            nodes = session.nodes.len(),
                            edges = session.edges.len(),
                            width = canvas_size.x,
                            height = canvas_size.y,
                            "session ready"
                        );
                        transition = Some(AppState::Ready(Box::new(session)));
                    });
                ctx.request_repaint();
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load class graph");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(Self::start_load(self.data_path.clone()));
                    }
                });
            }
            AppState::Ready(session) => session.show(ctx),
        }

        if let Some(next_state) = transition {
            self.state = next_state;
        }
    }
}
