//! Template rendering for test and story text.
//!
//! The generated test and story bodies are fixed templates with the
//! component name substituted in; they carry no logic of their own.

use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;

use crate::error::{ConvertError, Result};

const TEST_TEMPLATE: &str = r#"import { render, screen } from '@testing-library/react';
import { {{name}} } from './{{name}}';

describe('{{name}}', () => {
  it('renders without crashing', () => {
    render(<{{name}} />);
  });

  it('applies custom className', () => {
    const customClass = 'custom-class';
    render(<{{name}} className={customClass} />);
  });
});"#;

const STORYBOOK_TEMPLATE: &str = r#"import type { Meta, StoryObj } from '@storybook/react';
import { {{name}} } from './{{name}}';

const meta: Meta<typeof {{name}}> = {
  title: 'Components/{{name}}',
  component: {{name}},
  parameters: {
    layout: 'centered',
  },
  tags: ['autodocs'],
};

export default meta;
type Story = StoryObj<typeof meta>;

export const Default: Story = {
  args: {},
};"#;

/// Template engine over Handlebars with the verbatim artifact templates
/// pre-registered.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create an engine with the built-in templates registered.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars
            .register_template_string("tests", TEST_TEMPLATE)
            .map_err(ConvertError::InvalidTemplate)?;
        handlebars
            .register_template_string("storybook", STORYBOOK_TEMPLATE)
            .map_err(ConvertError::InvalidTemplate)?;
        Ok(Self { handlebars })
    }

    /// Render a registered template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.handlebars
            .render(name, data)
            .map_err(ConvertError::TemplateError)
    }

    /// Test text for a component.
    pub fn tests_for(&self, component_name: &str) -> Result<String> {
        self.render("tests", &json!({ "name": component_name }))
    }

    /// Story text for a component.
    pub fn storybook_for(&self, component_name: &str) -> Result<String> {
        self.render("storybook", &json!({ "name": component_name }))
    }
}
