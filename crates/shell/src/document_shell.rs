//! Interactive menu that fills a [`RequirementDocumentBuilder`].

use std::io::{BufRead, Write};

use tracing::debug;

use storefront_core::OutputFormat;
use storefront_documents::{RequirementDescription, RequirementDocumentBuilder, RequirementsDocument};

use crate::errors::ShellError;
use crate::prompt::{Prompter, Step};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DocumentAction {
    AddAuthor,
    AddName,
    AddProject,
    AddRequirement,
    Create,
    Exit,
}

impl DocumentAction {
    pub const ALL: [DocumentAction; 6] = [
        DocumentAction::AddAuthor,
        DocumentAction::AddName,
        DocumentAction::AddProject,
        DocumentAction::AddRequirement,
        DocumentAction::Create,
        DocumentAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DocumentAction::AddAuthor => "Add Author",
            DocumentAction::AddName => "Add Name",
            DocumentAction::AddProject => "Add Project",
            DocumentAction::AddRequirement => "Add Requirements",
            DocumentAction::Create => "Create",
            DocumentAction::Exit => "Exit",
        }
    }
}

/// Run the document menu.
///
/// Returns the finished document when Create was chosen; `None` when the user
/// exited or input ended first.
pub fn run<R: BufRead, W: Write>(
    mut builder: RequirementDocumentBuilder,
    prompter: &mut Prompter<R, W>,
    format: OutputFormat,
) -> Result<Option<RequirementsDocument>, ShellError> {
    let labels = DocumentAction::ALL.map(DocumentAction::label);

    loop {
        let Some(choice) = prompter.choose("What do you want to do?", &labels)? else {
            return Ok(None);
        };
        let action = DocumentAction::ALL[choice];
        debug!(action = action.label(), "document action selected");

        let step = match action {
            DocumentAction::AddAuthor => ask_header(prompter, "Document Author?", |answer| {
                builder.with_author(answer);
                format!("Author set to {answer}")
            })?,
            DocumentAction::AddName => ask_header(prompter, "Document Name?", |answer| {
                builder.with_name(answer);
                format!("Name set to {answer}")
            })?,
            DocumentAction::AddProject => ask_header(prompter, "Document Project?", |answer| {
                builder.with_project(answer);
                format!("Project set to {answer}")
            })?,
            DocumentAction::AddRequirement => add_requirement(&mut builder, prompter)?,
            DocumentAction::Create => {
                let document = builder.build();
                prompter.say(document.render(format)?)?;
                return Ok(Some(document));
            }
            DocumentAction::Exit => Step::Done,
        };

        if step == Step::Done {
            return Ok(None);
        }
    }
}

fn ask_header<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    question: &str,
    apply: impl FnOnce(&str) -> String,
) -> Result<Step, ShellError> {
    let Some(answer) = prompter.ask(question)? else {
        return Ok(Step::Done);
    };
    prompter.say(apply(&answer))?;
    Ok(Step::Continue)
}

fn add_requirement<R: BufRead, W: Write>(
    builder: &mut RequirementDocumentBuilder,
    prompter: &mut Prompter<R, W>,
) -> Result<Step, ShellError> {
    let Some(code) = prompter.ask("Requirement code?")? else {
        return Ok(Step::Done);
    };
    let Some(description) = prompter.ask("Requirement description?")? else {
        return Ok(Step::Done);
    };

    prompter.say(format_args!("Added requirement {code}: \"{description}\""))?;
    builder.add_requirement(RequirementDescription::new(code, description));
    Ok(Step::Continue)
}
