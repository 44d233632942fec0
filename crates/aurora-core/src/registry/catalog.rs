//! Components shipped with the CLI

use super::ComponentDefinition;

struct Entry {
    name: &'static str,
    display_name: &'static str,
    description: &'static str,
    files: &'static [&'static str],
    dependencies: &'static [&'static str],
    dev_dependencies: &'static [&'static str],
    registry_dependencies: &'static [&'static str],
}

const CATALOG: &[Entry] = &[
    Entry {
        name: "button",
        display_name: "Button",
        description: "Animated button with variants, sizes and a press ripple",
        files: &["components/ui/button.tsx"],
        dependencies: &["clsx"],
        dev_dependencies: &[],
        registry_dependencies: &[],
    },
    Entry {
        name: "chip",
        display_name: "Chip",
        description: "Compact, dismissible label for tags and filters",
        files: &["components/ui/chip.tsx"],
        dependencies: &["clsx", "framer-motion"],
        dev_dependencies: &[],
        registry_dependencies: &[],
    },
    Entry {
        name: "accordion",
        display_name: "Accordion",
        description: "Vertically stacked sections that expand with a spring",
        files: &["components/ui/accordion.tsx"],
        dependencies: &["clsx", "framer-motion", "lucide-react"],
        dev_dependencies: &[],
        registry_dependencies: &[],
    },
    Entry {
        name: "modal",
        display_name: "Modal",
        description: "Dialog overlay with focus trap and animated backdrop",
        files: &["components/ui/modal.tsx"],
        dependencies: &["clsx", "framer-motion"],
        dev_dependencies: &[],
        registry_dependencies: &["button"],
    },
    Entry {
        name: "skeleton",
        display_name: "Skeleton",
        description: "Shimmering placeholder for loading content",
        files: &["components/ui/skeleton.tsx"],
        dependencies: &["clsx"],
        dev_dependencies: &[],
        registry_dependencies: &[],
    },
    Entry {
        name: "card",
        display_name: "Card",
        description: "Surface with header, content and footer slots",
        files: &["components/ui/card.tsx"],
        dependencies: &["clsx"],
        dev_dependencies: &[],
        registry_dependencies: &[],
    },
    Entry {
        name: "input",
        display_name: "Input",
        description: "Text field with floating label and error state",
        files: &["components/ui/input.tsx"],
        dependencies: &["clsx"],
        dev_dependencies: &[],
        registry_dependencies: &[],
    },
    Entry {
        name: "tooltip",
        display_name: "Tooltip",
        description: "Hover and focus hint anchored to its trigger",
        files: &["components/ui/tooltip.tsx", "components/ui/use-tooltip.ts"],
        dependencies: &["clsx", "framer-motion"],
        dev_dependencies: &[],
        registry_dependencies: &[],
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The built-in component definitions, in catalog order
pub fn builtin_components() -> Vec<ComponentDefinition> {
    CATALOG
        .iter()
        .map(|e| ComponentDefinition {
            name: e.name.to_string(),
            display_name: e.display_name.to_string(),
            description: e.description.to_string(),
            files: owned(e.files),
            dependencies: owned(e.dependencies),
            dev_dependencies: owned(e.dev_dependencies),
            registry_dependencies: owned(e.registry_dependencies),
        })
        .collect()
}
