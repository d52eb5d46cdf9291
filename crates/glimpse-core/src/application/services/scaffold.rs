//! Scaffold Lifecycle Manager.
//!
//! Owns the on-disk scaffold directory: `ensure` materializes it (static
//! harness templates included) and `remove` tears it down. Both are
//! idempotent; the only states are Absent and Present.
//!
//! The generated aggregation file is also written through this manager so
//! one component owns every write into the scaffold.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::application::error::ApplicationError;
use crate::application::ports::Filesystem;
use crate::domain::{ProjectManifest, ProjectRoot, ScaffoldLayout};
use crate::error::{GlimpseError, GlimpseResult};

pub struct ScaffoldManager {
    fs: Arc<dyn Filesystem>,
}

impl ScaffoldManager {
    pub fn new(fs: Arc<dyn Filesystem>) -> Self {
        Self { fs }
    }

    /// Idempotent create-if-absent.
    ///
    /// Safe to call when the scaffold already exists from a prior run:
    /// static template files are written only when missing, so repeated
    /// `ensure` neither duplicates nor corrupts them. On a first-time
    /// population failure the partially created tree is rolled back so a
    /// half-populated scaffold is never presented as ready.
    pub fn ensure(
        &self,
        root: &ProjectRoot,
        manifest: &ProjectManifest,
    ) -> GlimpseResult<ScaffoldLayout> {
        let layout = ScaffoldLayout::for_project(root);
        let existed = self.fs.exists(&layout.scaffold_dir());

        match self.populate(&layout, manifest) {
            Ok(()) => {
                info!(
                    scaffold = %layout.scaffold_dir().display(),
                    reused = existed,
                    "scaffold ready"
                );
                Ok(layout)
            }
            Err(e) => {
                if !existed {
                    warn!("scaffold population failed, rolling back");
                    if let Err(cleanup) = self.fs.remove_dir_all(&layout.tool_dir()) {
                        warn!(error = %cleanup, "rollback failed");
                    }
                }
                Err(e)
            }
        }
    }

    fn populate(&self, layout: &ScaffoldLayout, manifest: &ProjectManifest) -> GlimpseResult<()> {
        self.fs
            .create_dir_all(&layout.scaffold_dir().join("lib/src"))?;
        self.write_template(
            &layout.scaffold_manifest(),
            &templates::scaffold_manifest(manifest),
        )?;
        self.write_template(&layout.harness_support(), templates::WIDGET_PREVIEW_SUPPORT)?;
        self.write_template(&layout.harness_entry(), templates::HARNESS_ENTRY)?;
        Ok(())
    }

    fn write_template(&self, path: &Path, content: &str) -> GlimpseResult<()> {
        if self.fs.exists(path) {
            return Ok(());
        }
        self.fs.write_atomic(path, content)
    }

    /// Idempotent delete-if-present.
    ///
    /// Succeeds (no-op) when the scaffold does not exist. Returns the tool
    /// directory path for reporting.
    pub fn remove(&self, root: &ProjectRoot) -> GlimpseResult<PathBuf> {
        let layout = ScaffoldLayout::for_project(root);
        let tool_dir = layout.tool_dir();
        if self.fs.exists(&tool_dir) {
            self.fs.remove_dir_all(&tool_dir)?;
            info!(dir = %tool_dir.display(), "scaffold removed");
        }
        Ok(tool_dir)
    }

    /// Atomically replace the generated aggregation file.
    ///
    /// Content is composed fully in memory by the generator; a crash
    /// mid-write never leaves a truncated file for the resolver or runtime
    /// to read.
    pub fn write_generated(
        &self,
        layout: &ScaffoldLayout,
        content: &str,
    ) -> GlimpseResult<PathBuf> {
        let path = layout.generated_file();
        if let Some(parent) = path.parent() {
            self.fs
                .create_dir_all(parent)
                .map_err(|e| generation_error(&path, e))?;
        }
        self.fs
            .write_atomic(&path, content)
            .map_err(|e| generation_error(&path, e))?;
        Ok(path)
    }
}

fn generation_error(path: &Path, source: GlimpseError) -> GlimpseError {
    ApplicationError::Generation {
        path: path.to_path_buf(),
        reason: source.to_string(),
    }
    .into()
}

// ── Static templates ──────────────────────────────────────────────────────────

mod templates {
    use crate::domain::ProjectManifest;

    /// The scaffold's own dependency manifest. The path dependency on the
    /// parent project is what makes generated `package:` imports resolve.
    pub fn scaffold_manifest(manifest: &ProjectManifest) -> String {
        format!(
            r#"name: widget_preview_scaffold
description: Generated widget preview harness. Do not edit.
publish_to: "none"

environment:
  sdk: ">=3.0.0 <4.0.0"

dependencies:
  flutter:
    sdk: flutter
  {name}:
    path: ../../
"#,
            name = manifest.package_name()
        )
    }

    pub const WIDGET_PREVIEW_SUPPORT: &str = r#"import 'package:flutter/widgets.dart';

/// A single previewable widget with its display metadata.
class WidgetPreview {
  const WidgetPreview({required this.builder, this.name});

  final Widget Function() builder;
  final String? name;
}
"#;

    pub const HARNESS_ENTRY: &str = r#"import 'package:flutter/material.dart';

import 'src/generated_preview.dart';
import 'src/widget_preview.dart';

void main() => runApp(const _PreviewApp());

class _PreviewApp extends StatelessWidget {
  const _PreviewApp();

  @override
  Widget build(BuildContext context) {
    final items = previews();
    return MaterialApp(
      home: Scaffold(
        appBar: AppBar(title: const Text('Widget previews')),
        body: ListView.separated(
          itemCount: items.length,
          separatorBuilder: (_, __) => const Divider(),
          itemBuilder: (context, index) {
            final preview = items[index];
            return Column(
              crossAxisAlignment: CrossAxisAlignment.start,
              children: [
                if (preview.name != null)
                  Padding(
                    padding: const EdgeInsets.all(8),
                    child: Text(preview.name!),
                  ),
                preview.builder(),
              ],
            );
          },
        ),
      ),
    );
  }
}
"#;
}
