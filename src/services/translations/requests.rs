//! Request and option types for the translations service.

use crate::errors::CrowdinResult;
use crate::types::{ListOptions, QueryParams, QueryValues};
use crate::validation::{
    exclusive_flags, exclusive_ids, require_non_empty, require_nonzero, require_text,
    within_range, BuildProjectTranslationRequest, RequestValidator,
};
use serde::Serialize;
use std::collections::HashMap;

const SKIP_UNTRANSLATED_STRINGS: &str = "skipUntranslatedStrings";
const SKIP_UNTRANSLATED_FILES: &str = "skipUntranslatedFiles";

fn skip_flags_exclusive(strings: Option<bool>, files: Option<bool>) -> CrowdinResult<()> {
    exclusive_flags(
        (SKIP_UNTRANSLATED_STRINGS, strings),
        (SKIP_UNTRANSLATED_FILES, files),
    )
}

fn is_unset_id(id: &Option<i64>) -> bool {
    !matches!(id, Some(id) if *id > 0)
}

/// Pre-translation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreTranslationMethod {
    /// Translation Memory
    Tm,
    /// Machine Translation; needs an engine
    Mt,
}

/// Which TM pre-translations are approved automatically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AutoApproveOption {
    /// Everything
    All,
    /// Everything except auto-substituted suggestions
    ExceptAutoSubstituted,
    /// Perfect TM matches that were approved before
    PerfectMatchApprovedOnly,
    /// Perfect TM matches
    PerfectMatchOnly,
    /// Nothing
    None,
}

/// Request to apply pre-translation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreTranslationRequest {
    /// Languages to pre-translate into
    pub language_ids: Vec<String>,
    /// Files to pre-translate
    pub file_ids: Vec<i64>,
    /// Method, `tm` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<PreTranslationMethod>,
    /// Machine translation engine, required with `mt`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_id: Option<i64>,
    /// Auto-approve policy (TM only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_approve_option: Option<AutoApproveOption>,
    /// Add translations even when an identical one exists (TM only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_translations: Option<bool>,
    /// Skip approved translations (TM only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_approved_translations: Option<bool>,
    /// Only untranslated strings; server default is `true` (TM only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_untranslated_only: Option<bool>,
    /// Only strings with identical source and context (TM only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_with_perfect_match_only: Option<bool>,
    /// Language ID to fallback language IDs (TM only)
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub fallback_languages: HashMap<String, Vec<String>>,
    /// Only strings with these labels
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub label_ids: Vec<i64>,
    /// Skip strings with these labels
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_label_ids: Vec<i64>,
}

impl PreTranslationRequest {
    /// Create a new pre-translation request
    pub fn new(language_ids: Vec<String>, file_ids: Vec<i64>) -> Self {
        Self {
            language_ids,
            file_ids,
            method: None,
            engine_id: None,
            auto_approve_option: None,
            duplicate_translations: None,
            skip_approved_translations: None,
            translate_untranslated_only: None,
            translate_with_perfect_match_only: None,
            fallback_languages: HashMap::new(),
            label_ids: Vec::new(),
            exclude_label_ids: Vec::new(),
        }
    }

    /// Pre-translate with Translation Memory
    pub fn via_tm(mut self) -> Self {
        self.method = Some(PreTranslationMethod::Tm);
        self.engine_id = None;
        self
    }

    /// Pre-translate with a Machine Translation engine
    pub fn via_mt(mut self, engine_id: i64) -> Self {
        self.method = Some(PreTranslationMethod::Mt);
        self.engine_id = Some(engine_id);
        self
    }

    /// Set the auto-approve policy
    pub fn auto_approve(mut self, option: AutoApproveOption) -> Self {
        self.auto_approve_option = Some(option);
        self
    }

    /// Add duplicate translations
    pub fn duplicate_translations(mut self, value: bool) -> Self {
        self.duplicate_translations = Some(value);
        self
    }

    /// Skip approved translations
    pub fn skip_approved_translations(mut self, value: bool) -> Self {
        self.skip_approved_translations = Some(value);
        self
    }

    /// Only fill untranslated strings
    pub fn translate_untranslated_only(mut self, value: bool) -> Self {
        self.translate_untranslated_only = Some(value);
        self
    }

    /// Only use perfect matches
    pub fn translate_with_perfect_match_only(mut self, value: bool) -> Self {
        self.translate_with_perfect_match_only = Some(value);
        self
    }

    /// Set fallback languages for one language
    pub fn fallback_languages(mut self, language_id: impl Into<String>, fallbacks: Vec<String>) -> Self {
        self.fallback_languages.insert(language_id.into(), fallbacks);
        self
    }

    /// Only strings with these labels
    pub fn label_ids(mut self, label_ids: Vec<i64>) -> Self {
        self.label_ids = label_ids;
        self
    }

    /// Skip strings with these labels
    pub fn exclude_label_ids(mut self, label_ids: Vec<i64>) -> Self {
        self.exclude_label_ids = label_ids;
        self
    }
}

impl RequestValidator for PreTranslationRequest {
    fn validate(&self) -> CrowdinResult<()> {
        require_non_empty("languageIds", &self.language_ids)?;
        require_non_empty("fileIds", &self.file_ids)
    }
}

/// Request to build translations of one directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildProjectDirectoryTranslationRequest {
    /// Target languages; empty means all
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub target_language_ids: Vec<String>,
    /// Export only translated strings; excludes `skipUntranslatedFiles`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_strings: Option<bool>,
    /// Export only translated files; excludes `skipUntranslatedStrings`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_files: Option<bool>,
    /// Export only approved strings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_approved_only: Option<bool>,
    /// Keep the directory hierarchy in the archive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_folder_hierarchy: Option<bool>,
}

impl BuildProjectDirectoryTranslationRequest {
    /// Create a new directory build request
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to some target languages
    pub fn target_language_ids(mut self, ids: Vec<String>) -> Self {
        self.target_language_ids = ids;
        self
    }

    /// Skip untranslated strings
    pub fn skip_untranslated_strings(mut self, value: bool) -> Self {
        self.skip_untranslated_strings = Some(value);
        self
    }

    /// Skip untranslated files
    pub fn skip_untranslated_files(mut self, value: bool) -> Self {
        self.skip_untranslated_files = Some(value);
        self
    }

    /// Export only approved strings
    pub fn export_approved_only(mut self, value: bool) -> Self {
        self.export_approved_only = Some(value);
        self
    }

    /// Keep the directory hierarchy
    pub fn preserve_folder_hierarchy(mut self, value: bool) -> Self {
        self.preserve_folder_hierarchy = Some(value);
        self
    }
}

impl RequestValidator for BuildProjectDirectoryTranslationRequest {
    fn validate(&self) -> CrowdinResult<()> {
        skip_flags_exclusive(self.skip_untranslated_strings, self.skip_untranslated_files)
    }
}

/// Request to build translations of one file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildProjectFileTranslationRequest {
    /// Target language
    pub target_language_id: String,
    /// Export only translated strings; excludes `skipUntranslatedFiles`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_strings: Option<bool>,
    /// Export only translated files; excludes `skipUntranslatedStrings`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_files: Option<bool>,
    /// Export only approved strings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_approved_only: Option<bool>,
}

impl BuildProjectFileTranslationRequest {
    /// Create a new file build request
    pub fn new(target_language_id: impl Into<String>) -> Self {
        Self {
            target_language_id: target_language_id.into(),
            ..Default::default()
        }
    }

    /// Skip untranslated strings
    pub fn skip_untranslated_strings(mut self, value: bool) -> Self {
        self.skip_untranslated_strings = Some(value);
        self
    }

    /// Skip untranslated files
    pub fn skip_untranslated_files(mut self, value: bool) -> Self {
        self.skip_untranslated_files = Some(value);
        self
    }

    /// Export only approved strings
    pub fn export_approved_only(mut self, value: bool) -> Self {
        self.export_approved_only = Some(value);
        self
    }
}

impl RequestValidator for BuildProjectFileTranslationRequest {
    fn validate(&self) -> CrowdinResult<()> {
        require_text("targetLanguageId", &self.target_language_id)?;
        skip_flags_exclusive(self.skip_untranslated_strings, self.skip_untranslated_files)
    }
}

/// Options for listing project builds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationsBuildsListOptions {
    /// Pagination and ordering
    pub list: ListOptions,
    /// Only builds of this branch
    pub branch_id: Option<i64>,
}

impl TranslationsBuildsListOptions {
    /// Create empty list options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set pagination and ordering
    pub fn list(mut self, list: ListOptions) -> Self {
        self.list = list;
        self
    }

    /// Filter by branch
    pub fn branch_id(mut self, branch_id: i64) -> Self {
        self.branch_id = Some(branch_id);
        self
    }
}

impl QueryParams for TranslationsBuildsListOptions {
    fn values(&self) -> QueryValues {
        let mut v = self.list.values();
        v.add_positive("branchId", self.branch_id);
        v
    }
}

/// Request to build the whole project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildProjectRequest {
    /// Branch to build; zero is not sent
    #[serde(skip_serializing_if = "is_unset_id")]
    pub branch_id: Option<i64>,
    /// Target languages; empty means all
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub target_language_ids: Vec<String>,
    /// Export only translated strings; excludes `skipUntranslatedFiles`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_strings: Option<bool>,
    /// Export only translated files; excludes `skipUntranslatedStrings`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_files: Option<bool>,
    /// Export only approved strings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_approved_only: Option<bool>,
}

impl BuildProjectRequest {
    /// Create a new project build request
    pub fn new() -> Self {
        Self::default()
    }

    /// Build one branch
    pub fn branch_id(mut self, branch_id: i64) -> Self {
        self.branch_id = Some(branch_id);
        self
    }

    /// Restrict to some target languages
    pub fn target_language_ids(mut self, ids: Vec<String>) -> Self {
        self.target_language_ids = ids;
        self
    }

    /// Skip untranslated strings
    pub fn skip_untranslated_strings(mut self, value: bool) -> Self {
        self.skip_untranslated_strings = Some(value);
        self
    }

    /// Skip untranslated files
    pub fn skip_untranslated_files(mut self, value: bool) -> Self {
        self.skip_untranslated_files = Some(value);
        self
    }

    /// Export only approved strings
    pub fn export_approved_only(mut self, value: bool) -> Self {
        self.export_approved_only = Some(value);
        self
    }
}

impl BuildProjectTranslationRequest for BuildProjectRequest {
    fn validate_build_request(&self) -> CrowdinResult<()> {
        skip_flags_exclusive(self.skip_untranslated_strings, self.skip_untranslated_files)
    }
}

impl RequestValidator for BuildProjectRequest {
    fn validate(&self) -> CrowdinResult<()> {
        self.validate_build_request()
    }
}

/// Character set used for pseudo-localization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharTransformation {
    /// Asian scripts
    Asian,
    /// Cyrillic
    Cyrillic,
    /// European accented Latin
    European,
    /// Arabic
    Arabic,
}

/// Accepted range of `lengthTransformation`, in percent
pub const LENGTH_TRANSFORMATION_RANGE: (i64, i64) = (-50, 100);

/// Request to build the project with pseudo-translations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PseudoBuildProjectRequest {
    /// Pseudo-translation flag; always sent
    pub pseudo: bool,
    /// Branch to build; zero is not sent
    #[serde(skip_serializing_if = "is_unset_id")]
    pub branch_id: Option<i64>,
    /// Characters prepended to each string to expose concatenation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Characters appended to each string to expose concatenation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Grow or shrink strings by this percentage (-50 to 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_transformation: Option<i64>,
    /// Replace characters with another script
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_transformation: Option<CharTransformation>,
}

impl PseudoBuildProjectRequest {
    /// Create a new pseudo-translation build request
    pub fn new() -> Self {
        Self {
            pseudo: true,
            ..Default::default()
        }
    }

    /// Build one branch
    pub fn branch_id(mut self, branch_id: i64) -> Self {
        self.branch_id = Some(branch_id);
        self
    }

    /// Set the prefix
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the suffix
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Set the length change in percent
    pub fn length_transformation(mut self, percent: i64) -> Self {
        self.length_transformation = Some(percent);
        self
    }

    /// Set the character transformation
    pub fn char_transformation(mut self, transformation: CharTransformation) -> Self {
        self.char_transformation = Some(transformation);
        self
    }
}

impl BuildProjectTranslationRequest for PseudoBuildProjectRequest {
    fn validate_build_request(&self) -> CrowdinResult<()> {
        let (min, max) = LENGTH_TRANSFORMATION_RANGE;
        within_range(
            "lengthTransformation",
            self.length_transformation.unwrap_or(0),
            min,
            max,
        )
    }
}

impl RequestValidator for PseudoBuildProjectRequest {
    fn validate(&self) -> CrowdinResult<()> {
        self.validate_build_request()
    }
}

/// Request to import translations from storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTranslationsRequest {
    /// Storage holding the translations
    pub storage_id: i64,
    /// Target file; required for every format except XLIFF
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<i64>,
    /// Target branch; for string-based projects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<i64>,
    /// Import translations identical to the source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_eq_suggestions: Option<bool>,
    /// Approve imported translations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_approve_imported: Option<bool>,
    /// Allow translating hidden strings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_hidden: Option<bool>,
}

impl UploadTranslationsRequest {
    /// Create a new upload request
    pub fn new(storage_id: i64) -> Self {
        Self {
            storage_id,
            ..Default::default()
        }
    }

    /// Import into a file
    pub fn file_id(mut self, file_id: i64) -> Self {
        self.file_id = Some(file_id);
        self
    }

    /// Import into a branch
    pub fn branch_id(mut self, branch_id: i64) -> Self {
        self.branch_id = Some(branch_id);
        self
    }

    /// Import translations equal to the source
    pub fn import_eq_suggestions(mut self, value: bool) -> Self {
        self.import_eq_suggestions = Some(value);
        self
    }

    /// Approve imported translations
    pub fn auto_approve_imported(mut self, value: bool) -> Self {
        self.auto_approve_imported = Some(value);
        self
    }

    /// Allow hidden strings
    pub fn translate_hidden(mut self, value: bool) -> Self {
        self.translate_hidden = Some(value);
        self
    }
}

impl RequestValidator for UploadTranslationsRequest {
    fn validate(&self) -> CrowdinResult<()> {
        require_nonzero("storageId", self.storage_id)?;
        exclusive_ids(("fileId", self.file_id), ("branchId", self.branch_id))
    }
}

/// Request to export translations of one language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTranslationRequest {
    /// Target language
    pub target_language_id: String,
    /// Export format; required unless exporting one file in its own format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Only strings with these labels
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub label_ids: Vec<i64>,
    /// Branches to export; excludes directories and files
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub branch_ids: Vec<i64>,
    /// Directories to export; excludes branches and files
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub directory_ids: Vec<i64>,
    /// Files to export; excludes branches and directories
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_ids: Vec<i64>,
    /// Export only translated strings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_strings: Option<bool>,
    /// Export only approved strings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_approved_only: Option<bool>,
}

impl ExportTranslationRequest {
    /// Create a new export request
    pub fn new(target_language_id: impl Into<String>) -> Self {
        Self {
            target_language_id: target_language_id.into(),
            ..Default::default()
        }
    }

    /// Set the export format
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Only strings with these labels
    pub fn label_ids(mut self, ids: Vec<i64>) -> Self {
        self.label_ids = ids;
        self
    }

    /// Export these branches
    pub fn branch_ids(mut self, ids: Vec<i64>) -> Self {
        self.branch_ids = ids;
        self
    }

    /// Export these directories
    pub fn directory_ids(mut self, ids: Vec<i64>) -> Self {
        self.directory_ids = ids;
        self
    }

    /// Export these files
    pub fn file_ids(mut self, ids: Vec<i64>) -> Self {
        self.file_ids = ids;
        self
    }

    /// Export only translated strings
    pub fn skip_untranslated_strings(mut self, value: bool) -> Self {
        self.skip_untranslated_strings = Some(value);
        self
    }

    /// Export only approved strings
    pub fn export_approved_only(mut self, value: bool) -> Self {
        self.export_approved_only = Some(value);
        self
    }
}

impl RequestValidator for ExportTranslationRequest {
    fn validate(&self) -> CrowdinResult<()> {
        require_text("targetLanguageId", &self.target_language_id)
    }
}
