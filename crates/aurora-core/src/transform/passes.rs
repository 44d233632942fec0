//! Individual rewrite passes
//!
//! Each pass is a pure `&str -> String` rewrite. A pass that finds nothing to
//! match returns its input unchanged. The patterns target the conventions of
//! the catalog's own component files, not arbitrary TypeScript.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Generic argument list, two levels of nesting deep
const GENERIC_ARGS: &str = r"<(?:[^<>]|<(?:[^<>]|<[^<>]*>)*>)*>";

/// A capitalized type name: `Foo`, `React.ReactNode`, `Array<Item>[]`
fn capitalized_type() -> String {
    format!(r"[A-Z]\w*(?:\.\w+)*(?:{GENERIC_ARGS})?(?:\[\])*")
}

/// Any single type: identifiers of either case or a string literal
fn any_type() -> String {
    format!(
        r#"(?:[A-Za-z_$][\w$]*(?:\.\w+)*(?:{GENERIC_ARGS})?(?:\[\])*|"[^"\n]*"|'[^'\n]*')"#
    )
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid transform pattern {pattern}: {e}"))
}

static DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| compile(r#"^(?:"use client"|'use client');?[ \t]*(?:\r?\n)?"#));

static TYPE_ONLY_IMPORT: Lazy<Regex> = Lazy::new(|| {
    compile(
        r#"(?m)^[ \t]*(?:import[ \t]+(?:type[ \t]+(?:\{[^}]*\}|\*[ \t]+as[ \t]+\w+|\w+)|\{(?:\s*type\s+\w+(?:\s+as\s+\w+)?\s*,?)+\s*\})\s*from\s*(?:"[^"]*"|'[^']*')|export[ \t]+type[ \t]*\{[^}]*\}(?:\s*from\s*(?:"[^"]*"|'[^']*'))?);?[ \t]*(?:\r?\n)?"#,
    )
});

static BRACE_IMPORT: Lazy<Regex> =
    Lazy::new(|| compile(r"(import\s+(?:\w+\s*,\s*)?\{)([^}]*)(\})"));

static TYPE_SPECIFIER_AFTER_COMMA: Lazy<Regex> =
    Lazy::new(|| compile(r",\s*type\s+\w+(?:\s+as\s+\w+)?"));

static TYPE_SPECIFIER_LEADING: Lazy<Regex> =
    Lazy::new(|| compile(r"^(\s*)type\s+\w+(?:\s+as\s+\w+)?\s*,\s*"));

static INTERFACE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?m)^(?:export[ \t]+)?interface[ \t]+\w+(?:<[^>]*>)?(?:\s+extends\s+[^{]+)?\s*\{[^}]*\}[ \t]*;?[ \t]*(?:\r?\n)?",
    )
});

static TYPE_ALIAS: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?m)^(?:export[ \t]+)?type[ \t]+\w+(?:<[^>]*>)?\s*=[^;]*;[ \t]*(?:\r?\n)?")
});

static GENERIC_PARAMS: Lazy<Regex> =
    Lazy::new(|| compile(r"(\w)<[A-Z](?:[^<>\n]|<[^<>\n]*>)*>"));

static INLINE_ANNOTATION: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r":[ \t]*{}(?:\s*\|\s*{})*(\s*[,)=])",
        capitalized_type(),
        any_type()
    ))
});

static RETURN_TYPE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"\)[ \t]*:[ \t]*{ty}(?:\s*\|\s*{ty})*\s*(\{{|=>)",
        ty = any_type()
    ))
});

/// Module statements are matched first so their `as` aliases survive
static TYPE_ASSERTION: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r#"(?m)(^import\s[^'"]*['"][^'"]*['"]|^export\s*(?:\*|\{{)[^'";]*(?:['"][^'"]*['"])?)|\s+as\s+(?:any\b|{})"#,
        capitalized_type()
    ))
});

static SATISFIES: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"\s+satisfies\s+{}", any_type())));

static UTILITY_ANNOTATION: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r":[ \t]*(?:Record|Partial|Required|Pick|Omit){GENERIC_ARGS}"
    ))
});

static AS_CONST: Lazy<Regex> = Lazy::new(|| compile(r"\s+as\s+const\b"));

static EXTRA_BLANK_LINES: Lazy<Regex> = Lazy::new(|| compile(r"\n(?:[ \t]*\n){2,}"));

static DANGLING_COLON: Lazy<Regex> = Lazy::new(|| compile(r":[ \t]*([,)};])"));

static DANGLING_PAREN: Lazy<Regex> = Lazy::new(|| compile(r"\([ \t]*,[ \t]*"));

/// Drop a leading `"use client"` line; only the very start of the file counts
pub fn remove_client_directive(source: &str) -> String {
    DIRECTIVE.replace(source, "").into_owned()
}

pub fn remove_type_only_imports(source: &str) -> String {
    TYPE_ONLY_IMPORT.replace_all(source, "").into_owned()
}

/// Remove `type X` specifiers from brace import lists that also import values
pub fn remove_type_specifiers(source: &str) -> String {
    BRACE_IMPORT
        .replace_all(source, |caps: &Captures| {
            let list = TYPE_SPECIFIER_AFTER_COMMA.replace_all(&caps[2], "");
            let list = TYPE_SPECIFIER_LEADING.replace(&list, "${1}");
            format!("{}{}{}", &caps[1], list, &caps[3])
        })
        .into_owned()
}

pub fn remove_interfaces(source: &str) -> String {
    INTERFACE_BLOCK.replace_all(source, "").into_owned()
}

pub fn remove_type_aliases(source: &str) -> String {
    TYPE_ALIAS.replace_all(source, "").into_owned()
}

pub fn remove_generic_params(source: &str) -> String {
    GENERIC_PARAMS.replace_all(source, "${1}").into_owned()
}

pub fn remove_inline_annotations(source: &str) -> String {
    INLINE_ANNOTATION.replace_all(source, "${1}").into_owned()
}

pub fn remove_return_types(source: &str) -> String {
    RETURN_TYPE.replace_all(source, ") ${1}").into_owned()
}

pub fn remove_type_assertions(source: &str) -> String {
    TYPE_ASSERTION
        .replace_all(source, |caps: &Captures| {
            caps.get(1)
                .map(|statement| statement.as_str().to_string())
                .unwrap_or_default()
        })
        .into_owned()
}

pub fn remove_satisfies(source: &str) -> String {
    SATISFIES.replace_all(source, "").into_owned()
}

pub fn remove_utility_annotations(source: &str) -> String {
    UTILITY_ANNOTATION.replace_all(source, "").into_owned()
}

pub fn remove_as_const(source: &str) -> String {
    AS_CONST.replace_all(source, "").into_owned()
}

pub fn collapse_blank_lines(source: &str) -> String {
    EXTRA_BLANK_LINES.replace_all(source, "\n\n").into_owned()
}

/// Clean up punctuation orphaned by the deletions above
pub fn remove_dangling_punctuation(source: &str) -> String {
    let source = DANGLING_COLON.replace_all(source, "${1}");
    DANGLING_PAREN.replace_all(&source, "(").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_patterns_compile() {
        for re in [
            &DIRECTIVE,
            &TYPE_ONLY_IMPORT,
            &BRACE_IMPORT,
            &TYPE_SPECIFIER_AFTER_COMMA,
            &TYPE_SPECIFIER_LEADING,
            &INTERFACE_BLOCK,
            &TYPE_ALIAS,
            &GENERIC_PARAMS,
            &INLINE_ANNOTATION,
            &RETURN_TYPE,
            &TYPE_ASSERTION,
            &SATISFIES,
            &UTILITY_ANNOTATION,
            &AS_CONST,
            &EXTRA_BLANK_LINES,
            &DANGLING_COLON,
            &DANGLING_PAREN,
        ] {
            Lazy::force(re);
        }
    }

    #[test]
    fn test_directive_double_and_single_quotes() {
        assert_eq!(
            remove_client_directive("\"use client\";\nimport x from \"x\";\n"),
            "import x from \"x\";\n"
        );
        assert_eq!(
            remove_client_directive("'use client'\nconst a = 1;\n"),
            "const a = 1;\n"
        );
    }

    #[test]
    fn test_directive_only_removed_at_file_start() {
        let source = "import x from \"x\";\n\"use client\";\nconst a = 1;\n";
        assert_eq!(remove_client_directive(source), source);

        let indented = "  \"use client\";\nconst a = 1;\n";
        assert_eq!(remove_client_directive(indented), indented);
    }

    #[test]
    fn test_directive_removed_once() {
        let source = "\"use client\";\n\"use client\";\n";
        assert_eq!(remove_client_directive(source), "\"use client\";\n");
    }

    #[test]
    fn test_type_only_import_lines() {
        let source = "import type { Foo } from \"./foo\";\nimport type Bar from 'bar';\nimport { type A, type B } from \"ab\";\nexport type { Foo };\nimport x from \"x\";\n";
        assert_eq!(remove_type_only_imports(source), "import x from \"x\";\n");
    }

    #[test]
    fn test_multiline_type_only_import() {
        let source = "import type {\n  Foo,\n  Bar,\n} from \"./types\";\nconst a = 1;\n";
        assert_eq!(remove_type_only_imports(source), "const a = 1;\n");
    }

    #[test]
    fn test_type_specifier_positions() {
        assert_eq!(
            remove_type_specifiers("import { type A, b } from \"x\";"),
            "import { b } from \"x\";"
        );
        assert_eq!(
            remove_type_specifiers("import { a, type B, c } from \"x\";"),
            "import { a, c } from \"x\";"
        );
        assert_eq!(
            remove_type_specifiers("import { a, type B } from \"x\";"),
            "import { a } from \"x\";"
        );
        assert_eq!(
            remove_type_specifiers("import React, { type FC, useState } from \"react\";"),
            "import React, { useState } from \"react\";"
        );
    }

    #[test]
    fn test_type_specifiers_in_multiline_list() {
        let source = "import {\n  type A,\n  b,\n  type C,\n  d,\n} from \"x\";";
        assert_eq!(
            remove_type_specifiers(source),
            "import {\n  b,\n  d,\n} from \"x\";"
        );
    }

    #[test]
    fn test_type_specifiers_ignore_object_literals() {
        let source = "const props = { a, type: \"button\" };";
        assert_eq!(remove_type_specifiers(source), source);
    }

    #[test]
    fn test_interface_block() {
        let source = "export interface ButtonProps\n  extends React.ButtonHTMLAttributes<HTMLButtonElement> {\n  variant?: \"primary\" | \"ghost\";\n}\nconst a = 1;\n";
        assert_eq!(remove_interfaces(source), "const a = 1;\n");
    }

    #[test]
    fn test_nested_interface_is_cut_at_first_brace() {
        let source = "interface Theme {\n  colors: { primary: string };\n  radius: number;\n}\nconst x = 1;\n";
        assert_eq!(
            remove_interfaces(source),
            "  radius: number;\n}\nconst x = 1;\n"
        );
    }

    #[test]
    fn test_type_alias() {
        let source = "type Size = \"sm\" | \"md\";\nexport type Tone =\n  | \"neutral\"\n  | \"accent\";\nconst a = 1;\n";
        assert_eq!(remove_type_aliases(source), "const a = 1;\n");
    }

    #[test]
    fn test_generic_params() {
        assert_eq!(
            remove_generic_params("React.forwardRef<HTMLButtonElement, ButtonProps>(render)"),
            "React.forwardRef(render)"
        );
        assert_eq!(
            remove_generic_params("useRef<HTMLDivElement | null>(null)"),
            "useRef(null)"
        );
        assert_eq!(
            remove_generic_params("useState<boolean>(false)"),
            "useState<boolean>(false)"
        );
        // JSX tags are not preceded by an identifier character
        assert_eq!(
            remove_generic_params("return (<Button>Go</Button>);"),
            "return (<Button>Go</Button>);"
        );
    }

    #[test]
    fn test_inline_annotations() {
        assert_eq!(
            remove_inline_annotations("function Chip({ label }: ChipProps) {"),
            "function Chip({ label }) {"
        );
        assert_eq!(
            remove_inline_annotations("(event: React.MouseEvent, extra: Item[]) => {}"),
            "(event, extra) => {}"
        );
        assert_eq!(
            remove_inline_annotations("const node: HTMLElement | null = ref.current;"),
            "const node = ref.current;"
        );
        assert_eq!(
            remove_inline_annotations("(props: React.ComponentProps<\"button\">) =>"),
            "(props) =>"
        );
        // lowercase primitives are outside what this pass recognizes
        assert_eq!(
            remove_inline_annotations("(name: string) => name"),
            "(name: string) => name"
        );
    }

    #[test]
    fn test_return_types() {
        assert_eq!(
            remove_return_types("function a(x): JSX.Element {"),
            "function a(x) {"
        );
        assert_eq!(
            remove_return_types("const b = (x): string | null => x;"),
            "const b = (x) => x;"
        );
        assert_eq!(
            remove_return_types("open ? show() : hide();"),
            "open ? show() : hide();"
        );
    }

    #[test]
    fn test_type_assertions() {
        assert_eq!(
            remove_type_assertions("const el = ref.current as HTMLElement;"),
            "const el = ref.current;"
        );
        assert_eq!(
            remove_type_assertions("(value as any).focus();"),
            "(value).focus();"
        );
        assert_eq!(
            remove_type_assertions("const s = sizes[size as keyof typeof sizes];"),
            "const s = sizes[size as keyof typeof sizes];"
        );
    }

    #[test]
    fn test_module_aliases_survive_assertion_pass() {
        let source = "import * as React from \"react\";\nimport { Root as Primitive } from \"lib\";\nexport { Button as PrimaryButton };\nexport * as Icons from \"./icons\";\n";
        assert_eq!(remove_type_assertions(source), source);
    }

    #[test]
    fn test_satisfies_and_as_const() {
        assert_eq!(
            remove_satisfies("const config = { a: 1 } satisfies Config;"),
            "const config = { a: 1 };"
        );
        assert_eq!(
            remove_as_const("const sizes = [\"sm\", \"md\"] as const;"),
            "const sizes = [\"sm\", \"md\"];"
        );
    }

    #[test]
    fn test_utility_annotations() {
        assert_eq!(
            remove_utility_annotations("let overrides: Partial<ButtonProps>;"),
            "let overrides;"
        );
        assert_eq!(
            remove_utility_annotations("const map: Record<string, Pick<Item, \"id\">> = {};"),
            "const map = {};"
        );
    }

    #[test]
    fn test_collapse_blank_lines() {
        assert_eq!(collapse_blank_lines("a\n\n\n\nb\n\nc\n"), "a\n\nb\n\nc\n");
        assert_eq!(collapse_blank_lines("a\n  \n\t\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_dangling_punctuation() {
        assert_eq!(
            remove_dangling_punctuation("const f = (a:, b:) => a;"),
            "const f = (a, b) => a;"
        );
        assert_eq!(remove_dangling_punctuation("call(, x)"), "call(x)");
        assert_eq!(
            remove_dangling_punctuation("const url = \"https://aurora.dev\";"),
            "const url = \"https://aurora.dev\";"
        );
    }
}
