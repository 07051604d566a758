//! Tree builders and dump checks shared by the integration tests.

use mml_dump::ast::{BinaryOperator, Block, Node, Sequence};

pub fn int(value: i32) -> Node {
    Node::integer(value)
}

/// `x` used as a value: the rvalue of variable `x`.
pub fn read(name: &str) -> Node {
    Node::rvalue(Node::variable(name))
}

pub fn binary(op: BinaryOperator, left: Node, right: Node) -> Node {
    Node::binary(op, left, right)
}

pub fn seq(nodes: Vec<Node>) -> Sequence {
    Sequence::new(nodes)
}

pub fn block(declarations: Vec<Node>, instructions: Vec<Node>) -> Block {
    let non_empty = |nodes: Vec<Node>| (!nodes.is_empty()).then(|| Sequence::new(nodes));
    Block::new(non_empty(declarations), non_empty(instructions))
}

/// Join lines, each terminated by a newline, the way the dumper writes them.
pub fn lines(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

/// Check that tags in a dump nest in stack order. Returns the number of opened tags.
pub fn check_nesting(dump: &str) -> Result<usize, String> {
    let mut stack: Vec<String> = Vec::new();
    let mut opened = 0;

    for (index, line) in dump.lines().enumerate() {
        let tag = line.trim_start_matches(' ');
        if let Some(rest) = tag.strip_prefix("</") {
            let name = rest
                .strip_suffix('>')
                .ok_or_else(|| format!("line {index}: malformed closing tag {tag:?}"))?;
            match stack.pop() {
                Some(open) if open == name => {}
                other => return Err(format!("line {index}: </{name}> closes {other:?}")),
            }
        } else if let Some(rest) = tag.strip_prefix('<') {
            let end = rest
                .find(|c: char| c == ' ' || c == '>')
                .ok_or_else(|| format!("line {index}: malformed opening tag {tag:?}"))?;
            let name = &rest[..end];
            opened += 1;
            if !tag.ends_with(&format!("</{name}>")) {
                stack.push(name.to_string());
            }
        } else {
            return Err(format!("line {index}: not a tag: {line:?}"));
        }
    }

    if stack.is_empty() {
        Ok(opened)
    } else {
        Err(format!("unclosed tags: {stack:?}"))
    }
}

/// Names of the `*_node` tags opened in a dump, in order.
pub fn node_tags(dump: &str) -> Vec<String> {
    dump.lines()
        .map(|line| line.trim_start_matches(' '))
        .filter(|tag| !tag.starts_with("</"))
        .filter_map(|tag| {
            let rest = tag.strip_prefix('<')?;
            let end = rest.find(|c: char| c == ' ' || c == '>')?;
            Some(rest[..end].to_string())
        })
        .filter(|name| name.ends_with("_node"))
        .collect()
}

/// How many `*_node` tags a tree should produce.
pub fn count_node_tags(node: &Node) -> usize {
    match node {
        Node::Data { .. } => 0,
        Node::Integer { .. }
        | Node::Double { .. }
        | Node::String { .. }
        | Node::Nil
        | Node::Null
        | Node::Variable { .. }
        | Node::Stop { .. }
        | Node::Next { .. }
        | Node::Input => 1,
        Node::Unary { argument, .. }
        | Node::StackAlloc { argument }
        | Node::Evaluation { argument } => 1 + count_node_tags(argument),
        Node::AddressOf { lvalue } | Node::Rvalue { lvalue } => 1 + count_node_tags(lvalue),
        Node::Sizeof { expression } => 1 + count_node_tags(expression),
        Node::Binary { left, right, .. } => 1 + count_node_tags(left) + count_node_tags(right),
        Node::Index { base, index } => 1 + count_node_tags(base) + count_node_tags(index),
        Node::Assignment { lvalue, rvalue } => {
            1 + count_node_tags(lvalue) + count_node_tags(rvalue)
        }
        Node::Sequence(sequence) => count_sequence(sequence),
        Node::Block(block) => count_block(block),
        Node::Declaration(declaration) => {
            1 + declaration
                .initializer
                .as_deref()
                .map_or(0, count_node_tags)
        }
        Node::FunctionDefinition(definition) => {
            1 + definition.arguments.as_ref().map_or(0, count_sequence)
                + count_block(&definition.block)
        }
        Node::FunctionCall(call) => {
            1 + call.identifier.as_deref().map_or(0, count_node_tags)
                + call.arguments.as_ref().map_or(0, count_sequence)
        }
        Node::If { condition, block } | Node::While { condition, block } => {
            1 + count_node_tags(condition) + count_node_tags(block)
        }
        Node::IfElse {
            condition,
            then_block,
            else_block,
        } => {
            1 + count_node_tags(condition)
                + count_node_tags(then_block)
                + count_node_tags(else_block)
        }
        Node::Return { value } => 1 + value.as_deref().map_or(0, count_node_tags),
        Node::Print { arguments } => 1 + count_sequence(arguments),
    }
}

fn count_sequence(sequence: &Sequence) -> usize {
    1 + sequence.iter().map(count_node_tags).sum::<usize>()
}

fn count_block(block: &Block) -> usize {
    1 + block.declarations.as_ref().map_or(0, count_sequence)
        + block.instructions.as_ref().map_or(0, count_sequence)
}
