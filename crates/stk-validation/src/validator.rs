//! Template validator
//!
//! Runs the naming, best-practice, security and performance checks over a
//! [`TemplateDraft`] and applies mechanical fixes.

use crate::config::ValidatorConfig;
use crate::finding::{AutoFix, Finding, FindingCategory};
use crate::naming::{is_pascal_case, to_pascal_case};
use crate::report::ValidationReport;
use std::collections::HashSet;
use stk_catalog::{Catalog, SECURITY_CLASS_TYPE};
use stk_model::{Attribute, TemplateDraft};

/// Result of [`TemplateValidator::auto_fix`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoFixOutcome {
    /// Fixes that changed the draft, in application order
    pub applied: Vec<AutoFix>,

    /// Report for the fixed draft
    pub report: ValidationReport,
}

/// Stateless template validator
///
/// Never fails: any draft, however broken, yields a report.
#[derive(Debug, Clone)]
pub struct TemplateValidator {
    config: ValidatorConfig,
    catalog: Catalog,
}

impl TemplateValidator {
    /// Validator over the standard catalog
    #[inline]
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            catalog: Catalog::standard(),
        }
    }

    /// With a specific catalog for type checks
    #[inline]
    #[must_use]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Run every check
    #[must_use]
    pub fn validate(&self, draft: &TemplateDraft) -> ValidationReport {
        let mut findings = Vec::new();
        self.check_naming(draft, &mut findings);
        self.check_best_practices(draft, &mut findings);
        self.check_security(draft, &mut findings);
        self.check_performance(draft, &mut findings);

        let report = ValidationReport::new(findings);
        tracing::debug!(
            template = %draft.name,
            errors = report.error_count(),
            warnings = report.warning_count(),
            score = report.score.value(),
            "validated template"
        );
        report
    }

    /// Apply every available fix, then validate again
    ///
    /// Findings without a fix are reported again unchanged. Running this twice
    /// in a row is the same as running it once.
    pub fn auto_fix(&self, draft: &mut TemplateDraft) -> AutoFixOutcome {
        let before = self.validate(draft);
        let applied: Vec<AutoFix> = before
            .fixes()
            .filter(|fix| fix.apply(draft))
            .cloned()
            .collect();

        if !applied.is_empty() {
            tracing::info!(template = %draft.name, fixes = applied.len(), "applied auto-fixes");
        }

        AutoFixOutcome {
            applied,
            report: self.validate(draft),
        }
    }

    fn check_naming(&self, draft: &TemplateDraft, out: &mut Vec<Finding>) {
        let cat = FindingCategory::Naming;

        if draft.name.trim().is_empty() {
            out.push(Finding::error(cat, "Template name is required").blocking());
        } else if is_pascal_case(&draft.name) {
            out.push(Finding::success(cat, "Template name follows PascalCase"));
        } else {
            let mut finding = Finding::error(
                cat,
                format!("Template name '{}' must be PascalCase", draft.name),
            );
            if let Some(fixed) = to_pascal_case(&draft.name) {
                finding = finding.with_fix(AutoFix::RenameTemplate { to: fixed });
            }
            out.push(finding);
        }

        let mut clean = true;
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for attr in &draft.attributes {
            if self.config.is_reserved(&attr.name) {
                clean = false;
                out.push(
                    Finding::warning(cat, format!("Attribute name '{}' is reserved", attr.name))
                        .with_subject(&attr.name),
                );
            }
            let key = attr.name.trim().to_lowercase();
            if !seen.insert(key.clone()) && reported.insert(key) {
                clean = false;
                out.push(
                    Finding::warning(cat, format!("Attribute name '{}' is used more than once", attr.name))
                        .with_subject(&attr.name),
                );
            }
        }
        if clean && !draft.attributes.is_empty() {
            out.push(Finding::success(cat, "Attribute names are unique and unreserved"));
        }
    }

    fn check_best_practices(&self, draft: &TemplateDraft, out: &mut Vec<Finding>) {
        let cat = FindingCategory::BestPractices;

        if draft.attributes.is_empty() {
            out.push(Finding::error(cat, "At least one attribute is required").blocking());
            return;
        }

        let mut undescribed = 0;
        for (index, attr) in draft.attributes.iter().enumerate() {
            if !attr.has_description() {
                undescribed += 1;
                out.push(
                    Finding::warning(cat, format!("Attribute '{}' has no description", attr.name))
                        .with_subject(&attr.name)
                        .with_fix(AutoFix::DescribeAttribute {
                            index,
                            description: self.config.placeholder_for(&attr.name),
                        }),
                );
            }
        }
        if undescribed == 0 {
            out.push(Finding::success(cat, "Every attribute is described"));
        }

        if draft.category.trim().eq_ignore_ascii_case("analog") {
            let has_quality = draft
                .attributes
                .iter()
                .any(|a| self.config.is_quality(&a.name, &a.data_type));
            if has_quality {
                out.push(Finding::success(cat, "Analog template carries a quality attribute"));
            } else {
                out.push(Finding::warning(
                    cat,
                    "Analog templates should include a quality attribute",
                ));
            }
        }

        if self.config.check_catalog_types {
            for attr in draft.attributes.iter().filter(|a| !self.catalog.contains(&a.data_type)) {
                out.push(
                    Finding::warning(
                        cat,
                        format!(
                            "Attribute '{}' uses data type '{}' which is not in the catalog",
                            attr.name, attr.data_type
                        ),
                    )
                    .with_subject(&attr.name),
                );
            }
        }
    }

    fn check_security(&self, draft: &TemplateDraft, out: &mut Vec<Finding>) {
        let cat = FindingCategory::Security;

        let classified = draft.attributes.iter().any(|a| self.is_classification(a));
        let sensitive: Vec<&Attribute> = draft
            .attributes
            .iter()
            .filter(|a| self.config.is_sensitive(&a.name))
            .collect();

        if classified {
            out.push(Finding::success(cat, "Security classification is defined"));
            return;
        }

        for attr in sensitive {
            out.push(
                Finding::warning(
                    cat,
                    format!(
                        "Sensitive attribute '{}' has no security classification",
                        attr.name
                    ),
                )
                .with_subject(&attr.name),
            );
        }
        out.push(Finding::warning(cat, "No security classification attribute is defined"));
    }

    fn check_performance(&self, draft: &TemplateDraft, out: &mut Vec<Finding>) {
        let cat = FindingCategory::Performance;
        let count = draft.attributes.len();
        let limit = self.config.max_attributes;

        if count > limit {
            out.push(Finding::warning(
                cat,
                format!(
                    "Template has {count} attributes (limit {limit}); large templates raise memory use and update load"
                ),
            ));
        } else {
            out.push(Finding::success(
                cat,
                format!("Attribute count {count} is within the limit of {limit}"),
            ));
        }
    }

    fn is_classification(&self, attr: &Attribute) -> bool {
        attr.data_type.trim().eq_ignore_ascii_case(SECURITY_CLASS_TYPE)
            || self.config.is_classification_name(&attr.name)
    }
}

impl Default for TemplateValidator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::FindingStatus;

    fn validator() -> TemplateValidator {
        TemplateValidator::default()
    }

    fn messages(report: &ValidationReport, status: FindingStatus) -> Vec<String> {
        report.with_status(status).map(|f| f.message.clone()).collect()
    }

    fn classified(draft: TemplateDraft) -> TemplateDraft {
        draft.with_attribute(
            Attribute::new("SecurityClass", SECURITY_CLASS_TYPE).with_description("Write class"),
        )
    }

    #[test]
    fn empty_draft_reports_both_blocking_errors() {
        let report = validator().validate(&TemplateDraft::default());
        let blocking: Vec<_> = report.findings.iter().filter(|f| f.blocking).collect();
        assert_eq!(blocking.len(), 2);
        assert!(report.is_blocked());
    }

    #[test]
    fn non_pascal_name_is_error_with_fix() {
        let draft = classified(TemplateDraft::new("pump a"));
        let report = validator().validate(&draft);
        let naming = report
            .in_category(FindingCategory::Naming)
            .find(|f| f.status == FindingStatus::Error)
            .unwrap();
        assert!(!naming.blocking);
        assert_eq!(naming.fix, Some(AutoFix::RenameTemplate { to: "PumpA".into() }));
    }

    #[test]
    fn reserved_and_duplicate_names_warn() {
        let draft = classified(
            TemplateDraft::new("PumpA")
                .with_attribute(Attribute::new("Tagname", "STRING").with_description("d"))
                .with_attribute(Attribute::new("Flow", "AI_REAL").with_description("d"))
                .with_attribute(Attribute::new("flow", "AI_REAL").with_description("d"))
                .with_attribute(Attribute::new("FLOW", "AI_REAL").with_description("d")),
        );
        let report = validator().validate(&draft);
        let warnings = messages(&report, FindingStatus::Warning);
        assert!(warnings.contains(&"Attribute name 'Tagname' is reserved".to_string()));
        assert_eq!(
            warnings.iter().filter(|m| m.contains("more than once")).count(),
            1
        );
    }

    #[test]
    fn missing_description_warns_with_placeholder_fix() {
        let draft = classified(TemplateDraft::new("PumpA").with_attribute(Attribute::new("Flow", "AI_REAL")));
        let report = validator().validate(&draft);
        let fixes: Vec<_> = report.fixes().cloned().collect();
        assert_eq!(
            fixes,
            vec![AutoFix::DescribeAttribute {
                index: 0,
                description: "Description for Flow".into()
            }]
        );
    }

    #[test]
    fn analog_without_quality_warns() {
        let draft = classified(
            TemplateDraft::new("PumpA")
                .with_category("Analog")
                .with_attribute(Attribute::new("Flow", "AI_REAL").with_description("d")),
        );
        let report = validator().validate(&draft);
        assert!(messages(&report, FindingStatus::Warning)
            .contains(&"Analog templates should include a quality attribute".to_string()));

        let with_quality = draft.with_attribute(
            Attribute::new("FlowQ", "AI_QUALITY").with_description("Quality"),
        );
        assert!(validator().validate(&with_quality).is_clean());
    }

    #[test]
    fn unknown_type_warns_unless_disabled() {
        let draft = classified(
            TemplateDraft::new("PumpA").with_attribute(Attribute::new("Flow", "FLOAT").with_description("d")),
        );
        assert_eq!(validator().validate(&draft).warning_count(), 1);

        let lenient = TemplateValidator::new(ValidatorConfig {
            check_catalog_types: false,
            ..ValidatorConfig::default()
        });
        assert!(lenient.validate(&draft).is_clean());
    }

    #[test]
    fn sensitive_attribute_without_classification_warns_twice() {
        let draft = TemplateDraft::new("Login")
            .with_attribute(Attribute::new("AdminPassword", "STRING").with_description("d"));
        let report = validator().validate(&draft);
        let security: Vec<_> = report
            .in_category(FindingCategory::Security)
            .filter(|f| f.status == FindingStatus::Warning)
            .collect();
        assert_eq!(security.len(), 2);
        assert_eq!(security[0].subject.as_deref(), Some("AdminPassword"));
        assert!(!report.is_blocked());
    }

    #[test]
    fn classification_by_name_counts() {
        let draft = TemplateDraft::new("Login")
            .with_attribute(Attribute::new("AdminPassword", "STRING").with_description("d"))
            .with_attribute(Attribute::new("Classification", "STRING").with_description("d"));
        let report = validator().validate(&draft);
        assert_eq!(report.in_category(FindingCategory::Security).count(), 1);
        assert!(report.is_clean());
    }

    #[test]
    fn attribute_limit_warns_without_error() {
        let config = ValidatorConfig::default().with_max_attributes(2);
        let mut draft = classified(TemplateDraft::new("Big"));
        for i in 0..3 {
            draft.attributes.push(Attribute::new(format!("A{i}"), "AI_REAL").with_description("d"));
        }
        let report = TemplateValidator::new(config).validate(&draft);
        let perf: Vec<_> = report.in_category(FindingCategory::Performance).collect();
        assert_eq!(perf.len(), 1);
        assert_eq!(perf[0].status, FindingStatus::Warning);
        assert_eq!(report.error_count(), 0);
    }

    #[test]
    fn auto_fix_repairs_name_and_descriptions() {
        let mut draft = classified(
            TemplateDraft::new("feed pump")
                .with_attribute(Attribute::new("Flow", "AI_REAL"))
                .with_attribute(Attribute::new("Run", "DI_BOOL")),
        );
        let outcome = validator().auto_fix(&mut draft);

        assert_eq!(outcome.applied.len(), 3);
        assert_eq!(draft.name, "FeedPump");
        assert_eq!(draft.attributes[1].description, "Description for Run");
        assert!(outcome.report.is_clean());
    }

    #[test]
    fn auto_fix_leaves_unfixable_findings() {
        let mut draft = TemplateDraft::new("123");
        let outcome = validator().auto_fix(&mut draft);
        assert!(outcome.applied.is_empty());
        assert_eq!(draft.name, "123");
        assert!(outcome.report.error_count() >= 2);
    }
}
