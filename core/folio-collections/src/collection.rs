//! Validated collections and their per-kind behaviour.
//!
//! A [`Collection`] is built once from a [`CollectionConfig`] and never
//! mutated. Behaviour that differs between folder and files collections is
//! routed through the [`KindOps`] table of the active [`CollectionKind`].

use crate::config::{CollectionConfig, FileConfig, FrontmatterDelimiter};
use crate::error::{CollectionError, CollectionResult};
use crate::format::Format;
use crate::inference::{self, SilentDiagnostics, TracingDiagnostics};
use folio_model::FieldSchema;
use serde::Serialize;
use std::collections::HashSet;

/// Default format for folder collections that declare neither a format nor
/// an extension.
const DEFAULT_FOLDER_FORMAT: Format = Format::Frontmatter;

/// How the backend enumerates a collection's entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ListMethod {
    EntriesByFolder,
    EntriesByFiles,
}

impl ListMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EntriesByFolder => "entriesByFolder",
            Self::EntriesByFiles => "entriesByFiles",
        }
    }
}

/// One fixed file of a files collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileEntry {
    /// Entry slug.
    pub name: String,
    pub label: Option<String>,
    /// Repository path of the file.
    pub file: String,
    pub fields: Vec<FieldSchema>,
}

impl From<FileConfig> for FileEntry {
    fn from(config: FileConfig) -> Self {
        Self {
            name: config.name,
            label: config.label,
            file: config.file,
            fields: config.fields,
        }
    }
}

/// Every file under `folder` is an entry sharing one field list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolderCollection {
    pub folder: String,
    pub fields: Option<Vec<FieldSchema>>,
}

/// A fixed list of files, each with its own field list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilesCollection {
    pub files: Vec<FileEntry>,
}

impl FilesCollection {
    /// The file whose name matches `slug`.
    pub fn file_for_entry(&self, slug: &str) -> Option<&FileEntry> {
        self.files.iter().find(|f| f.name == slug)
    }
}

/// The two collection kinds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CollectionKind {
    Folder(FolderCollection),
    Files(FilesCollection),
}

/// Operations whose behaviour depends on the collection kind.
trait KindOps {
    fn fields<'a>(&'a self, slug: Option<&str>) -> Option<&'a [FieldSchema]>;
    fn entry_path(&self, collection: &Collection, slug: &str) -> Option<String>;
    fn entry_slug(&self, collection: &Collection, path: &str) -> Option<String>;
    fn list_method(&self) -> ListMethod;
    fn allow_new_entries(&self, collection: &Collection) -> bool;
    fn template_name<'a>(&self, collection: &'a Collection, slug: &'a str) -> &'a str;
}

impl KindOps for FolderCollection {
    fn fields<'a>(&'a self, _slug: Option<&str>) -> Option<&'a [FieldSchema]> {
        self.fields.as_deref()
    }

    fn entry_path(&self, collection: &Collection, slug: &str) -> Option<String> {
        let folder = self.folder.strip_suffix('/').unwrap_or(&self.folder);
        Some(format!(
            "{folder}/{slug}.{}",
            collection.folder_entry_extension()
        ))
    }

    fn entry_slug(&self, collection: &Collection, path: &str) -> Option<String> {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        let suffix = format!(".{}", collection.folder_entry_extension());
        let slug = file_name.strip_suffix(suffix.as_str()).unwrap_or(file_name);
        Some(slug.to_string())
    }

    fn list_method(&self) -> ListMethod {
        ListMethod::EntriesByFolder
    }

    fn allow_new_entries(&self, collection: &Collection) -> bool {
        collection.create
    }

    fn template_name<'a>(&self, collection: &'a Collection, _slug: &'a str) -> &'a str {
        &collection.name
    }
}

impl KindOps for FilesCollection {
    fn fields<'a>(&'a self, slug: Option<&str>) -> Option<&'a [FieldSchema]> {
        slug.and_then(|s| self.file_for_entry(s))
            .map(|f| f.fields.as_slice())
    }

    fn entry_path(&self, _collection: &Collection, slug: &str) -> Option<String> {
        self.file_for_entry(slug).map(|f| f.file.clone())
    }

    fn entry_slug(&self, _collection: &Collection, path: &str) -> Option<String> {
        self.files
            .iter()
            .find(|f| f.file == path)
            .map(|f| f.name.clone())
    }

    fn list_method(&self) -> ListMethod {
        ListMethod::EntriesByFiles
    }

    fn allow_new_entries(&self, _collection: &Collection) -> bool {
        false
    }

    fn template_name<'a>(&self, _collection: &'a Collection, slug: &'a str) -> &'a str {
        slug
    }
}

/// A validated collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collection {
    name: String,
    label: Option<String>,
    label_singular: Option<String>,
    description: Option<String>,
    kind: CollectionKind,
    format: Option<Format>,
    extension: Option<String>,
    frontmatter_delimiter: Option<FrontmatterDelimiter>,
    create: bool,
    delete: bool,
    slug_template: Option<String>,
    identifier_field: Option<String>,
    preview_path: Option<String>,
}

impl Collection {
    /// Validates a collection config and builds the collection.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// kind, declared format, extension inference, frontmatter delimiter,
    /// then uniqueness of field and file names.
    pub fn from_config(config: CollectionConfig) -> CollectionResult<Self> {
        let name = config.name;

        let kind = match (config.folder, config.files) {
            (None, None) => return Err(CollectionError::UnknownType { collection: name }),
            (Some(_), Some(_)) => {
                return Err(CollectionError::AmbiguousType { collection: name });
            }
            (Some(folder), None) => CollectionKind::Folder(FolderCollection {
                folder,
                fields: config.fields,
            }),
            (None, Some(files)) => CollectionKind::Files(FilesCollection {
                files: files.into_iter().map(FileEntry::from).collect(),
            }),
        };

        let format = match config.format {
            Some(raw) => Some(raw.parse::<Format>().map_err(|format| {
                CollectionError::UnknownFormat {
                    collection: name.clone(),
                    format,
                }
            })?),
            None => None,
        };

        if format.is_none()
            && let Some(extension) = &config.extension
            && Format::from_extension(extension).is_none()
        {
            return Err(CollectionError::FormatRequired {
                collection: name,
                extension: extension.clone(),
            });
        }

        if config.frontmatter_delimiter.is_some()
            && !format.is_some_and(Format::accepts_custom_delimiter)
        {
            return Err(CollectionError::DelimiterRequiresFrontmatter { collection: name });
        }

        check_unique_names(&name, &kind)?;

        Ok(Self {
            name,
            label: config.label,
            label_singular: config.label_singular,
            description: config.description,
            kind,
            format,
            extension: config.extension,
            frontmatter_delimiter: config.frontmatter_delimiter,
            create: config.create.unwrap_or(false),
            delete: config.delete.unwrap_or(true),
            slug_template: config.slug,
            identifier_field: config.identifier_field,
            preview_path: config.preview_path,
        })
    }

    fn ops(&self) -> &dyn KindOps {
        match &self.kind {
            CollectionKind::Folder(folder) => folder,
            CollectionKind::Files(files) => files,
        }
    }

    // ── Attributes ───────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display label, falling back to the name.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    /// Singular display label, falling back to [`Self::label`].
    pub fn label_singular(&self) -> &str {
        self.label_singular.as_deref().unwrap_or_else(|| self.label())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn kind(&self) -> &CollectionKind {
        &self.kind
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, CollectionKind::Folder(_))
    }

    pub fn is_files(&self) -> bool {
        matches!(self.kind, CollectionKind::Files(_))
    }

    /// The declared format, if any.
    pub fn format(&self) -> Option<Format> {
        self.format
    }

    /// The declared format, or the one inferred from the extension, or the
    /// folder default.
    pub fn resolved_format(&self) -> Format {
        self.format
            .or_else(|| self.extension.as_deref().and_then(Format::from_extension))
            .unwrap_or(DEFAULT_FOLDER_FORMAT)
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn frontmatter_delimiter(&self) -> Option<&FrontmatterDelimiter> {
        self.frontmatter_delimiter.as_ref()
    }

    /// Slug template for new entries (e.g. `{{year}}-{{slug}}`).
    pub fn slug_template(&self) -> Option<&str> {
        self.slug_template.as_deref()
    }

    pub fn preview_path(&self) -> Option<&str> {
        self.preview_path.as_deref()
    }

    /// Field used to name new entries: the configured `identifier_field`, or
    /// the inferred title field. A failed inference is not reported here.
    pub fn identifier_field(&self) -> Option<&str> {
        match &self.identifier_field {
            Some(field) => Some(field.as_str()),
            None => inference::select_inferred_field(self, "title", &SilentDiagnostics),
        }
    }

    /// Extension used for folder entries: the explicit `extension`, or the
    /// one mapped from the format (default `frontmatter`).
    pub fn folder_entry_extension(&self) -> &str {
        match &self.extension {
            Some(ext) => ext.as_str(),
            None => self.format.unwrap_or(DEFAULT_FOLDER_FORMAT).extension(),
        }
    }

    /// The configured file for `slug` in a files collection.
    pub fn file_for_entry(&self, slug: &str) -> Option<&FileEntry> {
        match &self.kind {
            CollectionKind::Files(files) => files.file_for_entry(slug),
            CollectionKind::Folder(_) => None,
        }
    }

    /// Collection-level fields. Files collections have none.
    pub fn collection_fields(&self) -> Option<&[FieldSchema]> {
        match &self.kind {
            CollectionKind::Folder(folder) => folder.fields.as_deref(),
            CollectionKind::Files(_) => None,
        }
    }

    // ── Kind-dependent operations ────────────────────────────────

    /// Field schema for an entry. Folder collections ignore `slug`; files
    /// collections return the matching file's fields, or `None` when no file
    /// matches.
    pub fn fields(&self, slug: Option<&str>) -> Option<&[FieldSchema]> {
        self.ops().fields(slug)
    }

    /// Repository path of an entry.
    pub fn entry_path(&self, slug: &str) -> Option<String> {
        self.ops().entry_path(self, slug)
    }

    /// Inverse of [`Self::entry_path`].
    pub fn entry_slug(&self, path: &str) -> Option<String> {
        self.ops().entry_slug(self, path)
    }

    pub fn list_method(&self) -> ListMethod {
        self.ops().list_method()
    }

    /// Folder collections follow the `create` flag; files collections never
    /// allow new entries.
    pub fn allow_new_entries(&self) -> bool {
        self.ops().allow_new_entries(self)
    }

    /// Entries may be deleted unless `delete: false` was configured.
    pub fn allow_deletion(&self) -> bool {
        self.delete
    }

    /// Preview template name: the collection name for folders, the entry
    /// slug for files.
    pub fn template_name<'a>(&'a self, slug: &'a str) -> &'a str {
        self.ops().template_name(self, slug)
    }

    /// Convenience for [`inference::select_inferred_field`] with diagnostics
    /// sent to `tracing`.
    pub fn inferred_field(&self, field_name: &str) -> Option<&str> {
        inference::select_inferred_field(self, field_name, &TracingDiagnostics)
    }
}

fn check_unique_names(collection: &str, kind: &CollectionKind) -> CollectionResult<()> {
    match kind {
        CollectionKind::Folder(folder) => {
            if let Some(fields) = &folder.fields {
                check_unique_fields(collection, fields)?;
            }
        }
        CollectionKind::Files(files) => {
            let mut seen = HashSet::new();
            for file in &files.files {
                if !seen.insert(file.name.as_str()) {
                    return Err(CollectionError::DuplicateFile {
                        collection: collection.to_string(),
                        file: file.name.clone(),
                    });
                }
                check_unique_fields(collection, &file.fields)?;
            }
        }
    }
    Ok(())
}

fn check_unique_fields(collection: &str, fields: &[FieldSchema]) -> CollectionResult<()> {
    let mut seen = HashSet::new();
    for field in fields {
        if !seen.insert(field.name.as_str()) {
            return Err(CollectionError::DuplicateField {
                collection: collection.to_string(),
                field: field.name.clone(),
            });
        }
        if let Some(nested) = &field.fields {
            check_unique_fields(collection, nested)?;
        }
    }
    Ok(())
}
