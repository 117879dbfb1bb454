//! Indented C# source assembly.

/// Directives every generated unit starts with.
const SKELETON_USINGS: &[&str] = &[
    "System",
    "UnrealSharp",
    "UnrealSharp.Attributes",
    "UnrealSharp.Interop",
];

const INDENT: &str = "    ";

/// Line-oriented source builder with brace-driven indentation.
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    output: String,
    indent: usize,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Append one line at the current indentation. Empty lines carry no indentation.
    pub fn append_line(&mut self, line: impl AsRef<str>) {
        let line = line.as_ref();
        if !line.is_empty() {
            for _ in 0..self.indent {
                self.output.push_str(INDENT);
            }
            self.output.push_str(line);
        }
        self.output.push('\n');
    }

    pub fn blank_line(&mut self) {
        self.append_line("");
    }

    pub fn open_brace(&mut self) {
        self.append_line("{");
        self.indent += 1;
    }

    pub fn close_brace(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.append_line("}");
    }

    pub fn begin_unsafe_block(&mut self) {
        self.append_line("unsafe");
        self.open_brace();
    }

    pub fn end_unsafe_block(&mut self) {
        self.close_brace();
    }

    pub fn declare_directive(&mut self, namespace: &str) {
        self.append_line(format!("using {namespace};"));
    }

    /// Standard directives followed by a file-scoped namespace.
    pub fn generate_script_skeleton(&mut self, namespace: &str) {
        for using in SKELETON_USINGS {
            self.declare_directive(using);
        }
        self.blank_line();
        self.append_line(format!("namespace {namespace};"));
        self.blank_line();
    }

    /// `public [abstract ][partial ]<kind> <name>[ : <base>, <interfaces>...]` and `{`.
    pub fn declare_type(&mut self, decl: TypeDecl<'_>) {
        let mut header = String::from("public ");
        if decl.is_abstract {
            header.push_str("abstract ");
        }
        if decl.is_partial {
            header.push_str("partial ");
        }
        header.push_str(decl.kind);
        header.push(' ');
        header.push_str(decl.name);

        let bases: Vec<&str> = decl
            .base
            .into_iter()
            .chain(decl.interfaces.iter().map(String::as_str))
            .collect();
        if !bases.is_empty() {
            header.push_str(" : ");
            header.push_str(&bases.join(", "));
        }

        self.append_line(header);
        self.open_brace();
    }

    pub fn finish(self) -> String {
        self.output
    }
}

/// Header of a declared type.
#[derive(Clone, Copy, Debug)]
pub struct TypeDecl<'a> {
    pub kind: &'static str,
    pub name: &'a str,
    pub base: Option<&'a str>,
    pub is_abstract: bool,
    pub is_partial: bool,
    pub interfaces: &'a [String],
}

impl<'a> TypeDecl<'a> {
    pub fn new(kind: &'static str, name: &'a str) -> Self {
        Self {
            kind,
            name,
            base: None,
            is_abstract: false,
            is_partial: false,
            interfaces: &[],
        }
    }

    pub fn base(mut self, base: &'a str) -> Self {
        self.base = Some(base);
        self
    }

    pub fn is_abstract(mut self, value: bool) -> Self {
        self.is_abstract = value;
        self
    }

    pub fn partial(mut self) -> Self {
        self.is_partial = true;
        self
    }

    pub fn interfaces(mut self, interfaces: &'a [String]) -> Self {
        self.interfaces = interfaces;
        self
    }
}
