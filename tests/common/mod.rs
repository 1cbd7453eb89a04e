#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

use aws_context::aws_files::AwsPaths;
use aws_context::tui::Prompt;
use aws_context::{AppResult, ApplicationError};
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Select(usize),
    Input(String),
    Password(String),
    Confirm(bool),
    Interrupt,
}

/// Replays canned answers in order and records what was asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<Answer>>,
    pub asked: RefCell<Vec<String>>,
    pub offered: RefCell<Vec<String>>,
    pub suggestions: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new(answers: Vec<Answer>) -> Self {
        ScriptedPrompt {
            answers: RefCell::new(answers.into()),
            ..Default::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, title: &str) -> AppResult<Answer> {
        self.asked.borrow_mut().push(title.to_string());
        match self.answers.borrow_mut().pop_front() {
            Some(Answer::Interrupt) => Err(ApplicationError::Canceled),
            Some(answer) => Ok(answer),
            None => panic!("unexpected prompt: {title}"),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn select(&self, title: &str, options: &[String]) -> AppResult<usize> {
        *self.offered.borrow_mut() = options.to_vec();
        match self.next(title)? {
            Answer::Select(index) => Ok(index),
            other => panic!("expected select answer for {title}, got {other:?}"),
        }
    }

    fn input(&self, title: &str, suggestion: &str) -> AppResult<String> {
        self.suggestions.borrow_mut().push(suggestion.to_string());
        match self.next(title)? {
            Answer::Input(value) if value.is_empty() => Ok(suggestion.to_string()),
            Answer::Input(value) => Ok(value),
            other => panic!("expected input answer for {title}, got {other:?}"),
        }
    }

    fn password(&self, title: &str) -> AppResult<String> {
        match self.next(title)? {
            Answer::Password(value) => Ok(value),
            other => panic!("expected password answer for {title}, got {other:?}"),
        }
    }

    fn confirm(&self, title: &str, default: bool) -> AppResult<bool> {
        match self.next(title)? {
            Answer::Confirm(value) => Ok(value),
            other => panic!("expected confirm answer for {title} (default {default}), got {other:?}"),
        }
    }
}

pub fn input(value: &str) -> Answer {
    Answer::Input(value.to_string())
}

/// Temporary home holding a credentials and a config file.
pub struct Fixture {
    pub dir: TempDir,
    pub paths: AwsPaths,
}

impl Fixture {
    pub fn new(credentials: Option<&str>, config: Option<&str>) -> Self {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let aws_dir = dir.path().join(".aws");
        fs::create_dir_all(&aws_dir).expect("aws dir should be created");

        let paths = AwsPaths::new(aws_dir.join("credentials"), aws_dir.join("config"));
        if let Some(content) = credentials {
            fs::write(paths.credentials_file(), content).expect("credentials should be written");
        }
        if let Some(content) = config {
            fs::write(paths.config_file(), content).expect("config should be written");
        }

        Fixture { dir, paths }
    }

    pub fn credentials(&self) -> Option<String> {
        fs::read_to_string(self.paths.credentials_file()).ok()
    }

    pub fn config(&self) -> Option<String> {
        fs::read_to_string(self.paths.config_file()).ok()
    }

    pub fn credentials_path(&self) -> PathBuf {
        self.paths.credentials_file().to_path_buf()
    }
}
