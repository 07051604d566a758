//! One handler per node kind
//!
//!     Indentation steps: a direct structural child sits 2 deeper than its parent, a child inside
//!     a named wrapper (`condition`, `then`, `block`, `arguments`, ...) sits 4 deeper.
//!     Exceptions:
//!     - the assignment target is written at the assignment's own level,
//!     - a declaration's `initializer` wrapper is at the declaration's own level,
//!     - index, address-of, stack-alloc, rvalue, sizeof and return indent their child by 4.

use super::writer::TagWriter;
use crate::ast::{Block, Declaration, FunctionCall, FunctionDefinition, Node, Sequence};
use crate::common::literal::double_literal;
use crate::common::names::{qualifier_name, type_name};
use std::fmt::{self, Write};

impl<W: Write> TagWriter<'_, W> {
    /// Dump `node` and its subtree at `level`.
    pub fn visit(&mut self, node: &Node, level: usize) -> fmt::Result {
        log::trace!("visiting {} at level {level}", node.label());
        match node {
            Node::Integer { value } => self.inline_tag(node.label(), &value.to_string(), level),
            Node::Double { value } => self.inline_tag(node.label(), &double_literal(*value), level),
            Node::String { value } => self.inline_tag(node.label(), value, level),
            Node::Nil | Node::Null | Node::Input => self.empty(node.label(), level),
            Node::Data { .. } => Ok(()),
            Node::Unary { argument, .. } => self.with_child(node.label(), argument, level, 2),
            Node::Binary { left, right, .. } => {
                self.open_tag(node.label(), level)?;
                self.visit(left, level + 2)?;
                self.visit(right, level + 2)?;
                self.close_tag(node.label(), level)
            }
            Node::Variable { name } => self.inline_tag(node.label(), name, level),
            Node::Index { base, index } => {
                self.open_tag(node.label(), level)?;
                self.visit(base, level + 4)?;
                self.visit(index, level + 4)?;
                self.close_tag(node.label(), level)
            }
            Node::AddressOf { lvalue } | Node::Rvalue { lvalue } => {
                self.with_child(node.label(), lvalue, level, 4)
            }
            Node::StackAlloc { argument } => self.with_child(node.label(), argument, level, 4),
            Node::Sizeof { expression } => self.with_child(node.label(), expression, level, 4),
            Node::Evaluation { argument } => self.with_child(node.label(), argument, level, 2),
            Node::Assignment { lvalue, rvalue } => {
                self.open_tag(node.label(), level)?;
                self.visit(lvalue, level)?;
                self.pending.clear();
                self.visit(rvalue, level + 4)?;
                self.close_tag(node.label(), level)
            }
            Node::Sequence(sequence) => self.visit_sequence(sequence, level),
            Node::Block(block) => self.visit_block(block, level),
            Node::Declaration(declaration) => self.visit_declaration(declaration, level),
            Node::FunctionDefinition(definition) => {
                self.visit_function_definition(definition, level)
            }
            Node::FunctionCall(call) => self.visit_function_call(call, level),
            Node::If { condition, block } => {
                self.open_tag(node.label(), level)?;
                self.condition(condition, level)?;
                self.wrap("then", level + 2, |w| w.visit(block, level + 4))?;
                self.close_tag(node.label(), level)
            }
            Node::IfElse {
                condition,
                then_block,
                else_block,
            } => {
                self.open_tag(node.label(), level)?;
                self.condition(condition, level)?;
                self.wrap("then", level + 2, |w| w.visit(then_block, level + 4))?;
                self.wrap("else", level + 2, |w| w.visit(else_block, level + 4))?;
                self.close_tag(node.label(), level)
            }
            Node::While { condition, block } => {
                self.open_tag(node.label(), level)?;
                self.condition(condition, level)?;
                self.wrap("block", level + 2, |w| w.visit(block, level + 4))?;
                self.close_tag(node.label(), level)
            }
            Node::Return { value } => {
                self.open_tag(node.label(), level)?;
                if let Some(value) = value {
                    self.visit(value, level + 4)?;
                }
                self.close_tag(node.label(), level)
            }
            Node::Stop { level: depth } | Node::Next { level: depth } => {
                let depth = depth.to_string();
                self.open_tag_with_attributes(node.label(), &[("level", depth.as_str())], level)?;
                self.close_tag(node.label(), level)
            }
            Node::Print { arguments } => {
                self.open_tag(node.label(), level)?;
                self.visit_sequence(arguments, level + 2)?;
                self.close_tag(node.label(), level)
            }
        }
    }

    /// `<sequence_node size='N'>`, then every element in order.
    pub fn visit_sequence(&mut self, sequence: &Sequence, level: usize) -> fmt::Result {
        let size = sequence.size().to_string();
        self.open_tag_with_attributes("sequence_node", &[("size", size.as_str())], level)?;
        for node in sequence.iter() {
            self.visit(node, level + 2)?;
        }
        self.close_tag("sequence_node", level)
    }

    pub fn visit_block(&mut self, block: &Block, level: usize) -> fmt::Result {
        self.open_tag("block_node", level)?;
        self.optional_sequence("declarations", block.declarations.as_ref(), level + 2)?;
        self.optional_sequence("instructions", block.instructions.as_ref(), level + 2)?;
        self.close_tag("block_node", level)
    }

    pub fn visit_declaration(&mut self, declaration: &Declaration, level: usize) -> fmt::Result {
        self.pending.clear();

        let ty = match &declaration.ty {
            Some(ty) => type_name(Some(ty)),
            None => "auto".to_string(),
        };
        self.open_tag_with_attributes(
            "declaration_node",
            &[
                ("name", declaration.identifier.as_str()),
                ("qualifier", qualifier_name(declaration.qualifier)),
                ("type", ty.as_str()),
            ],
            level,
        )?;
        self.wrap("initializer", level, |w| match &declaration.initializer {
            Some(initializer) => w.visit(initializer, level + 4),
            None => Ok(()),
        })?;
        self.close_tag("declaration_node", level)
    }

    pub fn visit_function_definition(
        &mut self,
        definition: &FunctionDefinition,
        level: usize,
    ) -> fmt::Result {
        let ty = match &definition.ty {
            Some(ty) => type_name(Some(ty)),
            None => "auto".to_string(),
        };
        self.open_tag_with_attributes("function_definition_node", &[("type", ty.as_str())], level)?;
        self.optional_sequence("arguments", definition.arguments.as_ref(), level + 2)?;
        self.wrap("block", level + 2, |w| {
            w.visit_block(&definition.block, level + 4)
        })?;
        self.close_tag("function_definition_node", level)
    }

    pub fn visit_function_call(&mut self, call: &FunctionCall, level: usize) -> fmt::Result {
        self.open_tag("function_call_node", level)?;
        self.wrap("identifier", level + 2, |w| match &call.identifier {
            Some(identifier) => w.visit(identifier, level + 4),
            None => w.empty("recursive", level + 4),
        })?;
        self.optional_sequence("arguments", call.arguments.as_ref(), level + 2)?;
        self.close_tag("function_call_node", level)
    }

    fn empty(&mut self, name: &str, level: usize) -> fmt::Result {
        self.open_tag(name, level)?;
        self.close_tag(name, level)
    }

    fn with_child(&mut self, name: &str, child: &Node, level: usize, step: usize) -> fmt::Result {
        self.open_tag(name, level)?;
        self.visit(child, level + step)?;
        self.close_tag(name, level)
    }

    fn condition(&mut self, condition: &Node, level: usize) -> fmt::Result {
        self.wrap("condition", level + 2, |w| w.visit(condition, level + 4))
    }

    /// Wrapper at `level`, sequence (if any) 2 deeper.
    fn optional_sequence(
        &mut self,
        wrapper: &str,
        sequence: Option<&Sequence>,
        level: usize,
    ) -> fmt::Result {
        self.wrap(wrapper, level, |w| match sequence {
            Some(sequence) => w.visit_sequence(sequence, level + 2),
            None => Ok(()),
        })
    }
}
