//! Text of the aggregate output files: the name union, the icon map and the
//! barrel index

use std::path::PathBuf;

use crate::naming::IconIdentity;

/// First line of every aggregate file
pub const GENERATED_BANNER: &str = "// This file is auto-generated. Do not edit manually";

pub const COMPONENTS_DIR: &str = "components";
pub const TYPES_DIR: &str = "types";
pub const UTILS_DIR: &str = "utils";

pub const COMPONENT_EXTENSION: &str = "tsx";
pub const MODULE_EXTENSION: &str = "ts";

/// One output file, relative to the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// The aggregate files produced by a run, in write order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedFileSet {
    pub files: Vec<GeneratedFile>,
}

impl GeneratedFileSet {
    /// Build the types, icon map and index files for the given icons
    pub fn for_icons(icons: &[IconIdentity]) -> Self {
        Self {
            files: vec![
                GeneratedFile {
                    path: types_path(),
                    contents: types_file(icons),
                },
                GeneratedFile {
                    path: icon_map_path(),
                    contents: icon_map_file(icons),
                },
                GeneratedFile {
                    path: index_path(),
                    contents: index_file(icons),
                },
            ],
        }
    }

    #[cfg(test)]
    fn get(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path == PathBuf::from(path))
    }
}

/// `components/<Pascal>Icon.tsx`
pub fn component_path(icon: &IconIdentity) -> PathBuf {
    PathBuf::from(COMPONENTS_DIR).join(format!("{}.{}", icon.component_name(), COMPONENT_EXTENSION))
}

pub fn types_path() -> PathBuf {
    PathBuf::from(TYPES_DIR).join(format!("types.{}", MODULE_EXTENSION))
}

pub fn icon_map_path() -> PathBuf {
    PathBuf::from(UTILS_DIR).join(format!("icon-map.{}", MODULE_EXTENSION))
}

pub fn index_path() -> PathBuf {
    PathBuf::from(format!("index.{}", MODULE_EXTENSION))
}

/// Union of every icon key
pub fn types_file(icons: &[IconIdentity]) -> String {
    let union = if icons.is_empty() {
        // An empty union is not valid TypeScript
        "never".to_string()
    } else {
        icons
            .iter()
            .map(|icon| format!("'{}'", icon.clean_key))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    format!("{}\nexport type IconName = {};\n", GENERATED_BANNER, union)
}

/// Map from icon key to component, followed by the list of renamed files
pub fn icon_map_file(icons: &[IconIdentity]) -> String {
    let mut out = String::new();
    out.push_str(GENERATED_BANNER);
    out.push('\n');
    out.push_str("import type { FC, SVGProps } from \"react\";\n");
    out.push_str("import type { IconName } from \"../types/types\";\n");
    out.push('\n');

    for icon in icons {
        let component = icon.component_name();
        out.push_str(&format!(
            "import {} from \"../{}/{}\";\n",
            component, COMPONENTS_DIR, component
        ));
    }
    if !icons.is_empty() {
        out.push('\n');
    }

    out.push_str("type IconComponent = FC<SVGProps<SVGSVGElement>>;\n");
    out.push('\n');
    out.push_str("export const IconMap: Record<IconName, IconComponent> = {\n");
    for icon in icons {
        out.push_str(&format!(
            "  \"{}\": {},\n",
            icon.clean_key,
            icon.component_name()
        ));
    }
    out.push_str("} as const;\n");

    let renamed: Vec<&IconIdentity> = icons.iter().filter(|icon| icon.was_renamed).collect();
    if !renamed.is_empty() {
        out.push('\n');
        out.push_str("// Name transformations applied:\n");
        for icon in renamed {
            out.push_str(&format!(
                "// - \"{}\" → \"{}\"\n",
                icon.original_name, icon.clean_key
            ));
        }
    }

    out
}

/// Barrel file re-exporting the union, the map and every component
pub fn index_file(icons: &[IconIdentity]) -> String {
    let mut out = String::new();
    out.push_str("export type { IconName } from './types/types';\n");
    out.push_str("export { IconMap } from './utils/icon-map';\n");
    for icon in icons {
        let component = icon.component_name();
        out.push_str(&format!(
            "export {{ default as {} }} from './{}/{}';\n",
            component, COMPONENTS_DIR, component
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::normalize;
    use pretty_assertions::assert_eq;

    fn icons() -> Vec<IconIdentity> {
        vec![normalize("arrow-up.svg"), normalize("42-cool&icon.svg")]
    }

    #[test]
    fn test_types_file() {
        insta::assert_snapshot!(types_file(&icons()).trim_end(), @r###"
        // This file is auto-generated. Do not edit manually
        export type IconName = 'arrow-up' | '42-coolandicon';
        "###);
    }

    #[test]
    fn test_types_file_empty() {
        assert_eq!(
            types_file(&[]),
            format!("{}\nexport type IconName = never;\n", GENERATED_BANNER)
        );
    }

    #[test]
    fn test_icon_map_file() {
        let expected = r#"// This file is auto-generated. Do not edit manually
import type { FC, SVGProps } from "react";
import type { IconName } from "../types/types";

import ArrowUpIcon from "../components/ArrowUpIcon";
import Icon42CoolandiconIcon from "../components/Icon42CoolandiconIcon";

type IconComponent = FC<SVGProps<SVGSVGElement>>;

export const IconMap: Record<IconName, IconComponent> = {
  "arrow-up": ArrowUpIcon,
  "42-coolandicon": Icon42CoolandiconIcon,
} as const;

// Name transformations applied:
// - "42-cool&icon" → "42-coolandicon"
"#;
        assert_eq!(icon_map_file(&icons()), expected);
    }

    #[test]
    fn test_icon_map_without_renames_has_no_comment() {
        let map = icon_map_file(&[normalize("home.svg")]);
        assert!(!map.contains("Name transformations"));
        assert!(map.contains("  \"home\": HomeIcon,\n"));
    }

    #[test]
    fn test_index_file() {
        insta::assert_snapshot!(index_file(&icons()).trim_end(), @r###"
        export type { IconName } from './types/types';
        export { IconMap } from './utils/icon-map';
        export { default as ArrowUpIcon } from './components/ArrowUpIcon';
        export { default as Icon42CoolandiconIcon } from './components/Icon42CoolandiconIcon';
        "###);
    }

    #[test]
    fn test_paths() {
        let icon = normalize("arrow-up.svg");
        assert_eq!(component_path(&icon), PathBuf::from("components/ArrowUpIcon.tsx"));
        assert_eq!(types_path(), PathBuf::from("types/types.ts"));
        assert_eq!(icon_map_path(), PathBuf::from("utils/icon-map.ts"));
        assert_eq!(index_path(), PathBuf::from("index.ts"));
    }

    #[test]
    fn test_file_set_order() {
        let set = GeneratedFileSet::for_icons(&icons());
        let paths: Vec<_> = set.files.iter().map(|f| f.path.clone()).collect();
        assert_eq!(paths, vec![types_path(), icon_map_path(), index_path()]);
        assert!(set.get("index.ts").is_some());
    }
}
