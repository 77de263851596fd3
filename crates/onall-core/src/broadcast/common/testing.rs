//! Test doubles for the platform seams.

use std::cell::RefCell;

use crate::broadcast::errors::BroadcastError;
use crate::broadcast::traits::{CommandRunner, ToolOutput, WindowInfo, WindowSystem};
use crate::broadcast::types::WindowHandle;

type Responder = Box<dyn Fn(&str, &[&str]) -> std::io::Result<ToolOutput>>;

/// Records every invocation and answers with a closure.
pub struct FakeRunner {
    available: bool,
    respond: Responder,
    calls: RefCell<Vec<Vec<String>>>,
}

impl FakeRunner {
    pub fn new(respond: impl Fn(&str, &[&str]) -> std::io::Result<ToolOutput> + 'static) -> Self {
        Self {
            available: true,
            respond: Box::new(respond),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new(|_, _| Err(std::io::Error::from(std::io::ErrorKind::NotFound)))
        }
    }

    pub fn success(stdout: &str) -> ToolOutput {
        ToolOutput {
            success: true,
            code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    pub fn failure(code: i32, stderr: &str) -> ToolOutput {
        ToolOutput {
            success: false,
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }

    /// Program plus arguments of every run, in order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn is_available(&self, _program: &str) -> bool {
        self.available
    }

    fn run(&self, program: &str, args: &[&str]) -> std::io::Result<ToolOutput> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().map(|a| a.to_string()));
        self.calls.borrow_mut().push(call);
        (self.respond)(program, args)
    }
}

/// Scripted window system that logs every action.
#[derive(Default)]
pub struct FakeWindowSystem {
    pub windows: Vec<WindowInfo>,
    pub enumeration_error: Option<String>,
    pub failing_activations: Vec<WindowHandle>,
    pub actions: RefCell<Vec<String>>,
}

impl FakeWindowSystem {
    pub fn with_titles(titles: &[(u64, &str)]) -> Self {
        Self {
            windows: titles
                .iter()
                .map(|(id, title)| WindowInfo {
                    handle: WindowHandle::new(*id),
                    title: title.to_string(),
                })
                .collect(),
            ..Self::default()
        }
    }

    pub fn actions(&self) -> Vec<String> {
        self.actions.borrow().clone()
    }
}

impl WindowSystem for FakeWindowSystem {
    fn visible_windows(&self) -> Result<Vec<WindowInfo>, BroadcastError> {
        match &self.enumeration_error {
            Some(message) => Err(BroadcastError::EnumerationFailed {
                message: message.clone(),
            }),
            None => Ok(self.windows.clone()),
        }
    }

    fn activate(&self, handle: WindowHandle) -> Result<(), BroadcastError> {
        self.actions
            .borrow_mut()
            .push(format!("activate {}", handle));
        if self.failing_activations.contains(&handle) {
            return Err(BroadcastError::FocusFailed {
                handle,
                message: "SetForegroundWindow refused".to_string(),
            });
        }
        Ok(())
    }

    fn type_text(&self, text: &str) -> Result<(), BroadcastError> {
        self.actions.borrow_mut().push(format!("type {}", text));
        Ok(())
    }

    fn press_enter(&self) -> Result<(), BroadcastError> {
        self.actions.borrow_mut().push("enter".to_string());
        Ok(())
    }
}
