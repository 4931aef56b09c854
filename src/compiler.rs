/*!

  Lowering of the syntax tree to a flat program. The compiler walks the tree post-order,
  appending instructions as it goes. Branch operands that point forward are emitted as
  placeholders and patched with the program size once the branch destination has been reached,
  so every operand of a finished program is a valid address by construction.

*/

use crate::ast::Ast;
use crate::limits::REPEAT_UNBOUNDED;
use crate::program::{Inst, Program};


pub struct Compiler {
  program: Program,
}

impl Compiler {

  /// Compiles a tree into an executable program terminated by `Match`.
  pub fn compile(ast: &Ast) -> Program {
    let mut compiler = Compiler{
      program: Program::new()
    };

    compiler.emit_node(ast);
    compiler.program.push(Inst::Match);

    compiler.program
  }


  fn emit_node(&mut self, node: &Ast) {
    match node {

      Ast::Literal(c) => {
        self.program.push(Inst::Char(*c));
      }

      Ast::Dot => {
        self.program.push(Inst::Any);
      }

      Ast::Class{ bits, pred } => {
        match pred {
          Some(pred) => self.program.push(Inst::ClassPred{ pred: *pred, negated: false }),
          None       => self.program.push(Inst::Class(*bits)),
        };
      }

      Ast::NegClass{ bits, pred } => {
        match pred {
          Some(pred) => self.program.push(Inst::ClassPred{ pred: *pred, negated: true }),
          None       => self.program.push(Inst::NotClass(*bits)),
        };
      }

      Ast::AnchorStart => {
        self.program.push(Inst::AnchorStart);
      }

      Ast::AnchorEnd => {
        self.program.push(Inst::AnchorEnd);
      }

      Ast::Concat(left, right) => {
        self.emit_node(left);
        self.emit_node(right);
      }

      Ast::Alternate(left, right) => {
        self.emit_alternate(left, right);
      }

      Ast::Repeat{ node, min, max, .. } => {
        self.emit_repeat(node, *min, *max);
      }

      Ast::Group{ index, node } => {
        let index = *index as usize;
        self.program.push(Inst::Save(2 * index));
        self.emit_node(node);
        self.program.push(Inst::Save(2 * index + 1));
      }

      Ast::Backref(group) => {
        self.program.push(Inst::Backref(*group));
      }

    }
  }


  /**
  ```text
      SPLIT L, R
  L:  <left>
      JUMP E
  R:  <right>
  E:
  ```
  The engine takes the primary target first and stacks the secondary, so the left alternative
  wins whenever both match at the same starting position.
  */
  fn emit_alternate(&mut self, left: &Ast, right: &Ast) {
    let split_at = self.program.push(Inst::Split{ primary: 0, secondary: 0 });
    self.emit_node(left);
    let jump_at = self.program.push(Inst::Jump(0));

    self.program.patch_split(split_at, split_at + 1, jump_at + 1);
    self.emit_node(right);
    self.program.patch_jump(jump_at, self.program.len());
  }


  /**
  Quantifiers lower to four shapes, all greedy (the body is the primary split target).

  `e*`:
  ```text
  S:  SPLIT B, E
  B:  <body>
      JUMP S
  E:
  ```

  `e+` emits the body once before the same loop, so one iteration is unconditional.

  `e?` is a single split over the body.

  `e{n,m}` unrolls `n` mandatory copies followed by `m - n` optional copies, each guarded by
  a split whose secondary operand is the address after the whole tail. When `m <= n` the tail
  is empty and the quantifier means exactly `n`; this covers the `{n,}` spelling, whose
  missing upper bound decodes as 0.
  */
  fn emit_repeat(&mut self, body: &Ast, min: u32, max: u32) {
    if max == REPEAT_UNBOUNDED {
      if min == 0 {
        // e*
        let split_at = self.program.push(Inst::Split{ primary: 0, secondary: 0 });
        self.emit_node(body);
        let jump_at = self.program.push(Inst::Jump(split_at));
        self.program.patch_split(split_at, split_at + 1, jump_at + 1);
      }
      else {
        // e+
        self.emit_node(body);
        let split_at = self.program.push(Inst::Split{ primary: 0, secondary: 0 });
        self.emit_node(body);
        let jump_at = self.program.push(Inst::Jump(split_at));
        self.program.patch_split(split_at, split_at + 1, jump_at + 1);
      }
    }
    else if min == 0 && max == 1 {
      // e?
      let split_at = self.program.push(Inst::Split{ primary: 0, secondary: 0 });
      self.emit_node(body);
      self.program.patch_split(split_at, split_at + 1, self.program.len());
    }
    else {
      // e{n,m}
      for _ in 0..min {
        self.emit_node(body);
      }

      let optional = max.saturating_sub(min);
      let mut split_ats: Vec<usize> = Vec::with_capacity(optional as usize);
      for _ in 0..optional {
        split_ats.push(self.program.push(Inst::Split{ primary: 0, secondary: 0 }));
        self.emit_node(body);
      }

      let end = self.program.len();
      for split_at in split_ats {
        self.program.patch_split(split_at, split_at + 1, end);
      }
    }
  }

}
