//! In-process stand-in for the remote jobs server
//!
//! Speaks the same JSON-RPC methods the facade uses and keeps pipelines in
//! memory, so the HTTP gateway and the facade can be exercised end to end.

#![allow(dead_code)]

use jobq_core::domain::{PipelineCollection, PipelineStat};
use jobq_core::Jobs;
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::types::ErrorObjectOwned;
use jsonrpsee::RpcModule;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

pub const ERR_PIPELINE_EXISTS: i32 = 1;
pub const ERR_NO_SUCH_PIPELINE: i32 = 2;
pub const ERR_INVALID_PIPELINE: i32 = 3;

#[derive(Debug, Clone)]
pub struct RemotePipeline {
    pub name: String,
    pub driver: String,
    pub priority: u64,
    pub options: BTreeMap<String, String>,
    pub ready: bool,
}

#[derive(Debug)]
pub struct RemoteState {
    pub pipelines: Vec<RemotePipeline>,
    /// Raw `informer.List` answer
    pub informer_response: Value,
    /// Every pause/resume/destroy command as (method, names)
    pub commands: Vec<(String, Vec<String>)>,
    /// Every `pipeline` map received by jobs.Declare
    pub declared: Vec<BTreeMap<String, String>>,
}

impl Default for RemoteState {
    fn default() -> Self {
        Self {
            pipelines: Vec::new(),
            informer_response: json!(["http", "jobs", "rpc"]),
            commands: Vec::new(),
            declared: Vec::new(),
        }
    }
}

#[derive(Deserialize)]
struct DeclareBody {
    pipeline: BTreeMap<String, String>,
}

type SharedState = Arc<Mutex<RemoteState>>;

pub struct FakeJobsServer {
    pub addr: SocketAddr,
    pub state: SharedState,
    handle: ServerHandle,
}

impl FakeJobsServer {
    pub async fn start() -> Self {
        Self::start_with(RemoteState::default()).await
    }

    pub async fn start_with(initial: RemoteState) -> Self {
        let state: SharedState = Arc::new(Mutex::new(initial));

        let server = Server::builder()
            .build("127.0.0.1:0")
            .await
            .expect("bind fake jobs server");
        let addr = server.local_addr().expect("local addr");

        let module = build_module(state.clone());
        let handle = server.start(module);

        Self {
            addr,
            state,
            handle,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn jobs(&self) -> Jobs {
        jobq_rpc::connect(self.url()).expect("gateway for fake server")
    }

    pub fn state(&self) -> std::sync::MutexGuard<'_, RemoteState> {
        self.state.lock().unwrap()
    }

    pub fn stop(self) {
        let _ = self.handle.stop();
    }
}

fn remote_error(code: i32, message: impl Into<String>) -> ErrorObjectOwned {
    ErrorObjectOwned::owned(code, message.into(), None::<()>)
}

fn build_module(state: SharedState) -> RpcModule<SharedState> {
    let mut module = RpcModule::new(state);

    module
        .register_method("informer.List", |_params, state, _| {
            Ok::<Value, ErrorObjectOwned>(state.lock().unwrap().informer_response.clone())
        })
        .expect("register informer.List");

    module
        .register_method("jobs.Declare", |params, state, _| -> Result<Value, ErrorObjectOwned> {
            let body: DeclareBody = params.one()?;
            let map = body.pipeline;

            let name = map.get("name").cloned().unwrap_or_default();
            let driver = map.get("driver").cloned().unwrap_or_default();
            let priority: u64 = map
                .get("priority")
                .and_then(|p| p.parse().ok())
                .ok_or_else(|| remote_error(ERR_INVALID_PIPELINE, "priority must be numeric"))?;

            let mut state = state.lock().unwrap();
            state.declared.push(map.clone());

            if state.pipelines.iter().any(|p| p.name == name) {
                return Err(remote_error(
                    ERR_PIPELINE_EXISTS,
                    format!("pipeline {} already exists", name),
                ));
            }

            let options = map
                .into_iter()
                .filter(|(key, _)| !matches!(key.as_str(), "name" | "driver" | "priority"))
                .collect();

            state.pipelines.push(RemotePipeline {
                name,
                driver,
                priority,
                options,
                ready: true,
            });
            Ok(json!({}))
        })
        .expect("register jobs.Declare");

    module
        .register_method("jobs.List", |_params, state, _| {
            let state = state.lock().unwrap();
            let names: PipelineCollection =
                state.pipelines.iter().map(|p| p.name.clone()).collect();
            Ok::<PipelineCollection, ErrorObjectOwned>(names)
        })
        .expect("register jobs.List");

    module
        .register_method("jobs.Stat", |_params, state, _| {
            let state = state.lock().unwrap();
            let stats: Vec<PipelineStat> = state
                .pipelines
                .iter()
                .map(|p| PipelineStat {
                    pipeline: p.name.clone(),
                    driver: p.driver.clone(),
                    queue: p.options.get("queue").cloned().unwrap_or_default(),
                    priority: p.priority,
                    ready: p.ready,
                    ..PipelineStat::default()
                })
                .collect();
            Ok::<Value, ErrorObjectOwned>(json!({ "stats": stats }))
        })
        .expect("register jobs.Stat");

    for method in ["jobs.Pause", "jobs.Resume", "jobs.Destroy"] {
        module
            .register_method(method, move |params, state, _| -> Result<Value, ErrorObjectOwned> {
                let body: PipelineCollection = params.one()?;
                let names: Vec<String> = body.into_iter().collect();

                let mut state = state.lock().unwrap();
                state.commands.push((method.to_string(), names.clone()));

                for name in &names {
                    if !state.pipelines.iter().any(|p| &p.name == name) {
                        return Err(remote_error(
                            ERR_NO_SUCH_PIPELINE,
                            format!("no such pipeline: {}", name),
                        ));
                    }
                }

                match method {
                    "jobs.Destroy" => state.pipelines.retain(|p| !names.contains(&p.name)),
                    _ => {
                        let ready = method == "jobs.Resume";
                        for pipeline in state.pipelines.iter_mut() {
                            if names.contains(&pipeline.name) {
                                pipeline.ready = ready;
                            }
                        }
                    }
                }

                Ok(json!({}))
            })
            .expect("register pipeline command");
    }

    module
}
