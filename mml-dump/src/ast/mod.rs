//! Typed MML syntax tree
//!
//!     The tree is built and typed by the upstream stages (parser, type checker). This crate only
//!     reads it. Children the grammar always produces are plain `Box<Node>` fields, the ones it may
//!     leave out are `Option`s, so a tree that type-checks here is one the dumper can walk without
//!     null checks.
//!
//!     Every type derives serde so trees can be handed over as JSON. The encoding is internally
//!     tagged on `kind`:
//!
//!     ```text
//!     {"kind": "binary", "op": "lt",
//!      "left": {"kind": "variable", "name": "x"},
//!      "right": {"kind": "integer", "value": 10}}
//!     ```

mod float;
pub mod types;

pub use types::{Qualifier, TypeDescriptor};

use serde::{Deserialize, Serialize};

/// A node of the typed syntax tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Integer {
        value: i32,
    },
    Double {
        #[serde(with = "float")]
        value: f64,
    },
    String {
        value: String,
    },
    Nil,
    Null,
    /// Opaque data blob. It has no tag representation.
    Data {
        #[serde(default)]
        bytes: Vec<u8>,
    },
    Unary {
        op: UnaryOperator,
        argument: Box<Node>,
    },
    Binary {
        op: BinaryOperator,
        left: Box<Node>,
        right: Box<Node>,
    },
    Variable {
        name: String,
    },
    Index {
        base: Box<Node>,
        index: Box<Node>,
    },
    AddressOf {
        lvalue: Box<Node>,
    },
    StackAlloc {
        argument: Box<Node>,
    },
    Rvalue {
        lvalue: Box<Node>,
    },
    Assignment {
        lvalue: Box<Node>,
        rvalue: Box<Node>,
    },
    Sequence(Sequence),
    Block(Block),
    Declaration(Declaration),
    FunctionDefinition(FunctionDefinition),
    FunctionCall(FunctionCall),
    Sizeof {
        expression: Box<Node>,
    },
    If {
        condition: Box<Node>,
        block: Box<Node>,
    },
    IfElse {
        condition: Box<Node>,
        then_block: Box<Node>,
        else_block: Box<Node>,
    },
    While {
        condition: Box<Node>,
        block: Box<Node>,
    },
    Return {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Box<Node>>,
    },
    /// Leaves the `level`-th enclosing loop.
    Stop {
        level: i32,
    },
    /// Restarts the `level`-th enclosing loop.
    Next {
        level: i32,
    },
    Input,
    Print {
        arguments: Sequence,
    },
    Evaluation {
        argument: Box<Node>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOperator {
    Neg,
    Not,
    Identity,
}

impl UnaryOperator {
    pub fn label(self) -> &'static str {
        match self {
            UnaryOperator::Neg => "neg_node",
            UnaryOperator::Not => "not_node",
            UnaryOperator::Identity => "identity_node",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Lt,
    Le,
    Ge,
    Gt,
    Ne,
    Eq,
    And,
    Or,
}

impl BinaryOperator {
    pub fn label(self) -> &'static str {
        match self {
            BinaryOperator::Add => "add_node",
            BinaryOperator::Sub => "sub_node",
            BinaryOperator::Mul => "mul_node",
            BinaryOperator::Div => "div_node",
            BinaryOperator::Mod => "mod_node",
            BinaryOperator::Lt => "lt_node",
            BinaryOperator::Le => "le_node",
            BinaryOperator::Ge => "ge_node",
            BinaryOperator::Gt => "gt_node",
            BinaryOperator::Ne => "ne_node",
            BinaryOperator::Eq => "eq_node",
            BinaryOperator::And => "and_node",
            BinaryOperator::Or => "or_node",
        }
    }
}

/// Ordered list of sibling nodes (arguments, declarations, instructions).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl Sequence {
    pub fn new(nodes: Vec<Node>) -> Self {
        Sequence { nodes }
    }

    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }
}

impl From<Vec<Node>> for Sequence {
    fn from(nodes: Vec<Node>) -> Self {
        Sequence::new(nodes)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declarations: Option<Sequence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Sequence>,
}

impl Block {
    pub fn new(declarations: Option<Sequence>, instructions: Option<Sequence>) -> Self {
        Block {
            declarations,
            instructions,
        }
    }

    /// A block with neither declarations nor instructions.
    pub fn empty() -> Self {
        Block::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub identifier: String,
    pub qualifier: Qualifier,
    /// Absent when the type is inferred from the initializer (`auto`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Sequence>,
    pub block: Block,
}

/// A call. A missing identifier means the function calls itself (`@`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Box<Node>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Sequence>,
}

impl Node {
    /// Tag name used for this node in dumps (`integer_node`, `while_node`, ...).
    pub fn label(&self) -> &'static str {
        match self {
            Node::Integer { .. } => "integer_node",
            Node::Double { .. } => "double_node",
            Node::String { .. } => "string_node",
            Node::Nil => "nil_node",
            Node::Null => "null_node",
            Node::Data { .. } => "data_node",
            Node::Unary { op, .. } => op.label(),
            Node::Binary { op, .. } => op.label(),
            Node::Variable { .. } => "variable_node",
            Node::Index { .. } => "index_node",
            Node::AddressOf { .. } => "address_of_node",
            Node::StackAlloc { .. } => "stack_alloc_node",
            Node::Rvalue { .. } => "rvalue_node",
            Node::Assignment { .. } => "assignment_node",
            Node::Sequence(_) => "sequence_node",
            Node::Block(_) => "block_node",
            Node::Declaration(_) => "declaration_node",
            Node::FunctionDefinition(_) => "function_definition_node",
            Node::FunctionCall(_) => "function_call_node",
            Node::Sizeof { .. } => "sizeof_node",
            Node::If { .. } => "if_node",
            Node::IfElse { .. } => "if_else_node",
            Node::While { .. } => "while_node",
            Node::Return { .. } => "return_node",
            Node::Stop { .. } => "stop_node",
            Node::Next { .. } => "next_node",
            Node::Input => "input_node",
            Node::Print { .. } => "print_node",
            Node::Evaluation { .. } => "evaluation_node",
        }
    }

    pub fn integer(value: i32) -> Self {
        Node::Integer { value }
    }

    pub fn double(value: f64) -> Self {
        Node::Double { value }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::String {
            value: value.into(),
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Node::Variable { name: name.into() }
    }

    /// Reads the value stored at `lvalue`.
    pub fn rvalue(lvalue: Node) -> Self {
        Node::Rvalue {
            lvalue: Box::new(lvalue),
        }
    }

    pub fn unary(op: UnaryOperator, argument: Node) -> Self {
        Node::Unary {
            op,
            argument: Box::new(argument),
        }
    }

    pub fn binary(op: BinaryOperator, left: Node, right: Node) -> Self {
        Node::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn assignment(lvalue: Node, rvalue: Node) -> Self {
        Node::Assignment {
            lvalue: Box::new(lvalue),
            rvalue: Box::new(rvalue),
        }
    }

    pub fn sequence(nodes: Vec<Node>) -> Self {
        Node::Sequence(Sequence::new(nodes))
    }

    pub fn declaration(
        identifier: impl Into<String>,
        qualifier: Qualifier,
        ty: Option<TypeDescriptor>,
        initializer: Option<Node>,
    ) -> Self {
        Node::Declaration(Declaration {
            identifier: identifier.into(),
            qualifier,
            ty,
            initializer: initializer.map(Box::new),
        })
    }

    pub fn while_loop(condition: Node, block: Node) -> Self {
        Node::While {
            condition: Box::new(condition),
            block: Box::new(block),
        }
    }

    pub fn evaluation(argument: Node) -> Self {
        Node::Evaluation {
            argument: Box::new(argument),
        }
    }
}
