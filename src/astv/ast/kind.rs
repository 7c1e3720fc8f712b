//! Node kinds
//!
//! The closed set of `type` tags the renderer has an extractor for. Tags are
//! the compiler's node class names, so they double as the display label of a
//! rendered node.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Broad grouping of node kinds, used for icons and summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeCategory {
    Literal,
    Declaration,
    Type,
    Routine,
    Variable,
    Expression,
    Statement,
    Program,
}

macro_rules! node_kinds {
    ($($variant:ident => $category:ident),+ $(,)?) => {
        /// Every AST node variant known to the renderer
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum NodeKind {
            $($variant),+
        }

        impl NodeKind {
            /// All kinds, in grammar order
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$variant),+];

            /// The serialized `type` tag of this kind
            pub fn tag(self) -> &'static str {
                match self {
                    $(NodeKind::$variant => stringify!($variant)),+
                }
            }

            pub fn category(self) -> NodeCategory {
                match self {
                    $(NodeKind::$variant => NodeCategory::$category),+
                }
            }
        }
    };
}

node_kinds! {
    StringNode => Literal,
    IdentifierNode => Literal,
    NumberNode => Literal,
    UnsignedConstantNode => Literal,
    SpecialSymbolNode => Literal,
    DirectiveNode => Literal,
    LabelDeclarationNode => Declaration,
    ConstantDefinitionNode => Declaration,
    ConstantDefinitionPartNode => Declaration,
    TypeIdentifierNode => Type,
    EnumeratedTypeNode => Type,
    SubrangeTypeNode => Type,
    ArrayTypeNode => Type,
    RecordSectionNode => Type,
    RecordVariantCaseNode => Type,
    RecordVariantNode => Type,
    RecordTypeNode => Type,
    SetTypeNode => Type,
    FileTypeNode => Type,
    PointerTypeNode => Type,
    TypeDefinitionNode => Declaration,
    TypeDefinitionPartNode => Declaration,
    VariableDeclarationNode => Declaration,
    VariableDeclarationPartNode => Declaration,
    IndexTypeSpecificationNode => Routine,
    PackedConformantArraySchemaNode => Routine,
    UnpackedConformantArraySchemaNode => Routine,
    ParameterSpecificationNode => Routine,
    ActualParameterListNode => Routine,
    ProcedureHeadingNode => Routine,
    ProcedureDeclarationNode => Routine,
    FunctionHeadingNode => Routine,
    FunctionDeclarationNode => Routine,
    ProcedureAndFunctionDeclarationPartNode => Routine,
    EntireVariableNode => Variable,
    IndexedVariableNode => Variable,
    FieldDesignatorNode => Variable,
    IdentifiedVariableNode => Variable,
    OpNode => Expression,
    ExpressionLikeNode => Expression,
    ExpressionNode => Expression,
    ElementDescriptionNode => Expression,
    SetConstructorNode => Expression,
    FunctionDesignatorNode => Expression,
    AssignmentStatementNode => Statement,
    ProcedureStatementNode => Statement,
    GotoStatementNode => Statement,
    CompoundStatementNode => Statement,
    ConditionalStatementNode => Statement,
    CaseStatementNode => Statement,
    CaseNode => Statement,
    WhileStatementNode => Statement,
    RepeatStatementNode => Statement,
    ForStatementNode => Statement,
    WithStatementNode => Statement,
    BlockNode => Program,
    ProgramHeadingNode => Program,
    ProgramNode => Program,
}

static KINDS_BY_TAG: Lazy<HashMap<&'static str, NodeKind>> =
    Lazy::new(|| NodeKind::ALL.iter().map(|kind| (kind.tag(), *kind)).collect());

impl NodeKind {
    /// Resolve a serialized `type` tag. Tags are case-sensitive.
    pub fn from_tag(tag: &str) -> Option<NodeKind> {
        KINDS_BY_TAG.get(tag).copied()
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
