//! Source downgrading for component files
//!
//! Registry components are authored as client-side TypeScript (`.tsx`). Projects
//! that are not on Next.js get the `"use client"` directive removed, and
//! projects without TypeScript get a best-effort, regex-based removal of type
//! syntax plus a `.jsx`/`.js` file extension.
//!
//! The rewrite is textual: passes run in a fixed order and each one assumes the
//! previous passes already ran. Known blind spots (interfaces with nested
//! braces, lowercase annotations such as `: string`) are left as they are.

pub mod passes;

/// Which rewrites to apply to a component file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOptions {
    /// Remove a leading `"use client"` directive
    pub strip_directive: bool,
    /// Remove type syntax and switch to an untyped file extension
    pub strip_types: bool,
}

/// Transformed file content and the path it should be written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
    pub content: String,
    pub path: String,
}

type Pass = fn(&str) -> String;

/// Type-stripping passes, in the order they must run
const TYPE_STRIPPING_PASSES: &[(&str, Pass)] = &[
    ("type-only imports", passes::remove_type_only_imports),
    ("type import specifiers", passes::remove_type_specifiers),
    ("interfaces", passes::remove_interfaces),
    ("type aliases", passes::remove_type_aliases),
    ("generic parameters", passes::remove_generic_params),
    ("inline annotations", passes::remove_inline_annotations),
    ("return types", passes::remove_return_types),
    ("type assertions", passes::remove_type_assertions),
    ("satisfies", passes::remove_satisfies),
    ("utility annotations", passes::remove_utility_annotations),
    ("as const", passes::remove_as_const),
    ("blank lines", passes::collapse_blank_lines),
    ("dangling punctuation", passes::remove_dangling_punctuation),
];

/// Remove TypeScript syntax from a component source
pub fn strip_types(source: &str) -> String {
    TYPE_STRIPPING_PASSES
        .iter()
        .fold(source.to_string(), |text, (name, pass)| {
            let next = pass(&text);
            if next != text {
                tracing::trace!(pass = name, "rewrote source");
            }
            next
        })
}

/// Apply the enabled rewrites to a component source
pub fn transform_source(source: &str, options: TransformOptions) -> String {
    let mut text = if options.strip_directive {
        passes::remove_client_directive(source)
    } else {
        source.to_string()
    };

    if options.strip_types {
        text = strip_types(&text);
    }

    text
}

/// Path a registry file is written to: `.tsx` becomes `.jsx` and `.ts` becomes
/// `.js` when types are stripped
pub fn output_path(path: &str, strip_types: bool) -> String {
    if !strip_types {
        return path.to_string();
    }

    if let Some(stem) = path.strip_suffix(".tsx") {
        format!("{}.jsx", stem)
    } else if let Some(stem) = path.strip_suffix(".ts") {
        format!("{}.js", stem)
    } else {
        path.to_string()
    }
}

/// Transform one registry file for the target project
pub fn transform_file(path: &str, source: &str, options: TransformOptions) -> TransformResult {
    TransformResult {
        content: transform_source(source, options),
        path: output_path(path, options.strip_types),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CHIP_SOURCE: &str = r#""use client";

import * as React from "react";
import { type ClassValue, clsx } from "clsx";
import type { Transition } from "framer-motion";

export interface ChipProps {
  label: string;
  onRemove?: () => void;
}

type Tone = "neutral" | "accent";

const spring = { type: "spring", stiffness: 400 } as const;

export function Chip({ label, onRemove }: ChipProps): JSX.Element {
  const ref = React.useRef<HTMLSpanElement>(null);
  const tone = (onRemove ? "accent" : "neutral") as Tone;
  const classes: ClassValue[] = ["chip", tone];
  return (
    <span ref={ref} className={clsx(classes)} data-spring={spring.type}>
      {label}
    </span>
  );
}
"#;

    const CHIP_UNTYPED: &str = r#"
import * as React from "react";
import { clsx } from "clsx";

const spring = { type: "spring", stiffness: 400 };

export function Chip({ label, onRemove }) {
  const ref = React.useRef(null);
  const tone = (onRemove ? "accent" : "neutral");
  const classes = ["chip", tone];
  return (
    <span ref={ref} className={clsx(classes)} data-spring={spring.type}>
      {label}
    </span>
  );
}
"#;

    const ALL: TransformOptions = TransformOptions {
        strip_directive: true,
        strip_types: true,
    };

    #[test]
    fn test_full_downgrade() {
        assert_eq!(transform_source(CHIP_SOURCE, ALL), CHIP_UNTYPED);
    }

    #[test]
    fn test_passthrough_when_nothing_enabled() {
        let result = transform_file(
            "components/ui/chip.tsx",
            CHIP_SOURCE,
            TransformOptions::default(),
        );
        assert_eq!(result.content, CHIP_SOURCE);
        assert_eq!(result.path, "components/ui/chip.tsx");
    }

    #[test]
    fn test_directive_only_keeps_types() {
        let options = TransformOptions {
            strip_directive: true,
            strip_types: false,
        };
        let result = transform_file("components/ui/chip.tsx", CHIP_SOURCE, options);
        assert!(!result.content.contains("use client"));
        assert!(result.content.contains("export interface ChipProps"));
        assert_eq!(result.path, "components/ui/chip.tsx");
    }

    #[test]
    fn test_types_only_keeps_directive() {
        let options = TransformOptions {
            strip_directive: false,
            strip_types: true,
        };
        let out = transform_source(CHIP_SOURCE, options);
        assert!(out.starts_with("\"use client\";\n"));
        assert!(!out.contains("interface"));
    }

    #[test]
    fn test_strip_types_is_idempotent() {
        let once = strip_types(CHIP_SOURCE);
        assert_eq!(strip_types(&once), once);
    }

    #[test]
    fn test_output_paths() {
        assert_eq!(output_path("components/ui/button.tsx", true), "components/ui/button.jsx");
        assert_eq!(output_path("components/ui/use-tooltip.ts", true), "components/ui/use-tooltip.js");
        assert_eq!(output_path("components/ui/button.tsx", false), "components/ui/button.tsx");
        assert_eq!(output_path("styles/theme.css", true), "styles/theme.css");
    }
}
