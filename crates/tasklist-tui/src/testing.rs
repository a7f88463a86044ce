//! Test doubles shared by the screen, backend, and app tests.

use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use tasklist_client::{ClientError, TaskApi};
use tasklist_core::{NewTask, NoticeKind, Notifier, Task, TaskId, TaskPatch};

use crate::event::UiEvent;
use crate::screen::TaskScreen;

/// Notifier that remembers every notice.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notices: Vec<(NoticeKind, String)>,
}

impl RecordingNotifier {
    pub fn count(&self, kind: NoticeKind) -> usize {
        self.notices.iter().filter(|(k, _)| *k == kind).count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, kind: NoticeKind, message: &str) {
        self.notices.push((kind, message.to_string()));
    }
}

/// In-memory task service that records every call.
#[derive(Default)]
pub struct FakeApi {
    tasks: Mutex<Vec<Task>>,
    next_id: Mutex<u64>,
    calls: Mutex<Vec<String>>,
    failing: Mutex<HashSet<&'static str>>,
    panicking: Mutex<HashSet<&'static str>>,
    delay: Mutex<Option<Duration>>,
}

impl FakeApi {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks
            .iter()
            .filter_map(|task| task.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            tasks: Mutex::new(tasks),
            next_id: Mutex::new(next_id),
            ..Default::default()
        }
    }

    /// Calls made so far, e.g. `["list", "create b", "delete 1"]`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Make an operation (`list`, `create`, `update`, `delete`) fail.
    pub fn fail_on(&self, op: &'static str) {
        self.failing.lock().unwrap().insert(op);
    }

    /// Make an operation panic.
    pub fn panic_on(&self, op: &'static str) {
        self.panicking.lock().unwrap().insert(op);
    }

    /// Delay every operation.
    pub fn delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    async fn enter(&self, op: &'static str, call: String) -> Result<(), ClientError> {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.calls.lock().unwrap().push(call);

        let panics = self.panicking.lock().unwrap().contains(op);
        if panics {
            panic!("fake {op} panicked");
        }
        let fails = self.failing.lock().unwrap().contains(op);
        if fails {
            return Err(ClientError::Status {
                status: 500,
                method: "FAKE",
                path: format!("/{op}"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl TaskApi for FakeApi {
    async fn list(&self) -> Result<Vec<Task>, ClientError> {
        self.enter("list", "list".to_string()).await?;
        Ok(self.tasks.lock().unwrap().clone())
    }

    async fn create(&self, task: &NewTask) -> Result<(), ClientError> {
        self.enter("create", format!("create {}", task.title)).await?;
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            let id = *next_id;
            *next_id += 1;
            id
        };
        self.tasks
            .lock()
            .unwrap()
            .push(Task::new(id.to_string(), task.title.clone(), false));
        Ok(())
    }

    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> Result<(), ClientError> {
        let mut call = format!("update {id}");
        if let Some(title) = &patch.title {
            call.push_str(&format!(" title={title}"));
        }
        if let Some(completed) = patch.completed {
            call.push_str(&format!(" completed={completed}"));
        }
        self.enter("update", call).await?;

        let mut tasks = self.tasks.lock().unwrap();
        if let Some(task) = tasks.iter_mut().find(|task| &task.id == id) {
            if let Some(title) = &patch.title {
                task.title = title.clone();
            }
            if let Some(completed) = patch.completed {
                task.completed = completed;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> Result<(), ClientError> {
        self.enter("delete", format!("delete {id}")).await?;
        self.tasks.lock().unwrap().retain(|task| &task.id != id);
        Ok(())
    }
}

/// Apply completions until no request is outstanding.
pub async fn settle<N: Notifier>(
    screen: &mut TaskScreen<N>,
    ui_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
) {
    while screen.is_loading() {
        let event = tokio::time::timeout(Duration::from_secs(5), ui_rx.recv())
            .await
            .expect("backend did not answer in time")
            .expect("backend hung up");
        screen.apply(event);
    }
}
