/*!
 * Reporting functionality for tokcount
 *
 * Renders token counts and the model catalog either as tables (using the
 * tabled library), as JSON, or as plain text for scripting.
 */

use clap::ValueEnum;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::error::Result;
use crate::tokenizer::{Registry, TokenCount};

/// Format of the report output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Console table output
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Bare values, one per line
    Plain,
}

/// Models of one provider as presented in listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Provider display name
    pub provider: String,
    /// Whether the provider counts exactly
    pub is_exact: bool,
    /// Sorted model identifiers
    pub models: Vec<String>,
}

/// Model catalog with the default model
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    /// Model used when none is requested
    pub default_model: String,
    /// Providers sorted by name
    pub providers: Vec<CatalogEntry>,
}

impl Catalog {
    /// Collect the listing of a registry, providers sorted by name
    pub fn from_registry(registry: &Registry, default_model: &str) -> Self {
        let providers = registry
            .list_models()
            .into_iter()
            .map(|(provider, models)| {
                let is_exact = models
                    .first()
                    .and_then(|model| registry.provider_info(model))
                    .map(|info| info.is_exact)
                    .unwrap_or(false);

                CatalogEntry {
                    provider,
                    is_exact,
                    models,
                }
            })
            .collect();

        Self {
            default_model: default_model.to_string(),
            providers,
        }
    }
}

/// Report generator for counts and listings
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    fn accuracy(&self, is_exact: bool) -> &'static str {
        if is_exact {
            "✓ exact"
        } else {
            "≈ estimated"
        }
    }

    fn styled(&self, mut table: Table) -> String {
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    /// Render a token count
    pub fn render_count(&self, result: &TokenCount) -> Result<String> {
        match self.format {
            ReportFormat::Table => Ok(self.count_table(result)),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            ReportFormat::Plain => Ok(result.token_count.to_string()),
        }
    }

    /// Render the model catalog
    pub fn render_catalog(&self, catalog: &Catalog) -> Result<String> {
        match self.format {
            ReportFormat::Table => Ok(self.catalog_table(catalog)),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(catalog)?),
            ReportFormat::Plain => Ok(catalog
                .providers
                .iter()
                .flat_map(|entry| entry.models.iter().cloned())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn count_table(&self, result: &TokenCount) -> String {
        #[derive(Tabled)]
        struct CountRow {
            #[tabled(rename = "Metric")]
            key: &'static str,

            #[tabled(rename = "Value")]
            value: String,
        }

        let mut tokens = result.token_count.to_string();
        if result.token_count >= 1_000 {
            tokens.push_str(&format!(" ({})", self.format_number(result.token_count)));
        }

        let rows = vec![
            CountRow {
                key: "🤖 Model",
                value: result.model.clone(),
            },
            CountRow {
                key: "🏢 Provider",
                value: result.provider.clone(),
            },
            CountRow {
                key: "🔢 Tokens",
                value: format!("{} [{}]", tokens, self.accuracy(!result.is_estimate)),
            },
        ];

        format!("🔢  TOKEN COUNT RESULT\n{}", self.styled(Table::new(rows)))
    }

    fn catalog_table(&self, catalog: &Catalog) -> String {
        #[derive(Tabled)]
        struct ModelRow {
            #[tabled(rename = "Provider")]
            provider: String,

            #[tabled(rename = "Accuracy")]
            accuracy: &'static str,

            #[tabled(rename = "Model")]
            model: String,

            #[tabled(rename = "Default")]
            default: &'static str,
        }

        let rows: Vec<ModelRow> = catalog
            .providers
            .iter()
            .flat_map(|entry| {
                entry.models.iter().enumerate().map(move |(i, model)| {
                    // Provider columns only on the first row of each group
                    let (provider, accuracy) = if i == 0 {
                        (entry.provider.clone(), self.accuracy(entry.is_exact))
                    } else {
                        (String::new(), "")
                    };

                    ModelRow {
                        provider,
                        accuracy,
                        model: model.clone(),
                        default: if *model == catalog.default_model {
                            "★"
                        } else {
                            ""
                        },
                    }
                })
            })
            .collect();

        format!(
            "📋  SUPPORTED LLM MODELS\n{}\n  Legend: ★ default model  |  ✓ exact count  |  ≈ estimated count",
            self.styled(Table::new(rows))
        )
    }
}
