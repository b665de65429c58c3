use crossterm::event::KeyEvent;

use super::{checkbox, edit_flag, edit_text, Form, Submission};
use vcli_core::types::ApiToken;
use vcli_core::validation::validate_token_description;
use vcli_core::VcliResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenField {
    Description,
    Readonly,
}

const FIELDS: [TokenField; 2] = [TokenField::Description, TokenField::Readonly];

impl TokenField {
    pub fn label(self) -> &'static str {
        match self {
            TokenField::Description => "Description",
            TokenField::Readonly => "Read only",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            TokenField::Description => "Description",
            TokenField::Readonly => "Status",
        }
    }
}

/// Values submitted by the token form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRequest {
    pub readonly: bool,
    pub description: String,
    /// Present when editing an existing token
    pub token: Option<String>,
}

#[derive(Debug)]
pub struct TokenForm {
    pub description: String,
    pub readonly: bool,
    pub current_field: TokenField,
    pub submission: Submission,
    /// Token being edited; shown read-only above the fields
    pub token: Option<String>,
    seed: (String, bool),
}

impl TokenForm {
    pub fn new() -> Self {
        Self {
            description: String::new(),
            readonly: false,
            current_field: TokenField::Description,
            submission: Submission::default(),
            token: None,
            seed: (String::new(), false),
        }
    }

    pub fn edit(token: &ApiToken) -> Self {
        let readonly = token.status.is_readonly();
        Self {
            description: token.description.clone(),
            readonly,
            token: Some(token.token.clone()),
            seed: (token.description.clone(), readonly),
            ..Self::new()
        }
    }

    pub fn fields(&self) -> &'static [TokenField] {
        &FIELDS
    }

    pub fn value(&self, field: TokenField) -> String {
        match field {
            TokenField::Description => self.description.clone(),
            TokenField::Readonly => checkbox(self.readonly),
        }
    }
}

impl Default for TokenForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for TokenForm {
    type Output = TokenRequest;

    fn field_count(&self) -> usize {
        FIELDS.len()
    }

    fn focus(&self) -> usize {
        match self.current_field {
            TokenField::Description => 0,
            TokenField::Readonly => 1,
        }
    }

    fn set_focus(&mut self, index: usize) {
        if let Some(field) = FIELDS.get(index) {
            self.current_field = *field;
        }
    }

    fn edit(&mut self, key: KeyEvent) -> bool {
        match self.current_field {
            TokenField::Description => edit_text(&mut self.description, key),
            TokenField::Readonly => edit_flag(&mut self.readonly, key),
        }
    }

    fn reset(&mut self) {
        self.description = self.seed.0.clone();
        self.readonly = self.seed.1;
        self.current_field = TokenField::Description;
        self.submission = Submission::default();
    }

    fn submission(&self) -> &Submission {
        &self.submission
    }

    fn submission_mut(&mut self) -> &mut Submission {
        &mut self.submission
    }

    fn validate(&self) -> VcliResult<TokenRequest> {
        validate_token_description(&self.description)?;
        Ok(TokenRequest {
            readonly: self.readonly,
            description: self.description.clone(),
            token: self.token.clone(),
        })
    }
}
