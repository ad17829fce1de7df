//! Text reports printed for a loaded worksheet.

use calamine::Data;
use std::io::{self, Write};

use crate::config::ReportOptions;
use crate::models::{ABSENT_PLACEHOLDER, RAW_CELL_COLUMNS, SAMPLE_FIELDS, STAT_COLUMNS};
use crate::services::excel::utils::{cell_reference, cell_to_text, cell_type_code};
use crate::services::excel::{CellValue, HeaderMatch, SheetAnalyzer, Worksheet};

pub struct Reporter<'a, W: Write> {
    out: W,
    sheet: &'a Worksheet,
    analyzer: SheetAnalyzer,
}

impl<'a, W: Write> Reporter<'a, W> {
    pub fn new(out: W, sheet: &'a Worksheet) -> Self {
        Self {
            out,
            sheet,
            analyzer: SheetAnalyzer,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn run(&mut self, options: &ReportOptions) -> io::Result<()> {
        self.shape()?;
        self.sample_rows(options.sample_rows)?;
        self.column_stats()?;
        self.column_listing()?;

        if options.extended {
            self.sheet_info()?;
            self.header_search()?;
            self.money_columns()?;
            self.raw_cells()?;
        }

        self.out.flush()
    }

    pub fn shape(&mut self) -> io::Result<()> {
        writeln!(self.out, "=== ANÁLISE DAS COLUNAS PROBLEMÁTICAS ===")?;
        writeln!(self.out, "Total de linhas: {}", self.sheet.row_count())?;
        writeln!(self.out, "Total de colunas: {}", self.sheet.column_count())
    }

    pub fn sample_rows(&mut self, rows: usize) -> io::Result<()> {
        writeln!(self.out, "\n=== VALORES DAS PRIMEIRAS {} LINHAS ===", rows)?;

        for idx in 0..rows.min(self.sheet.row_count()) {
            writeln!(self.out, "\nLinha {}:", idx + 1)?;
            for field in SAMPLE_FIELDS {
                match self.analyzer.field(self.sheet, idx, field) {
                    Some(value) => writeln!(self.out, "  {}: {}", field, value)?,
                    None => writeln!(self.out, "  {}: {}", field, ABSENT_PLACEHOLDER)?,
                }
            }
        }
        Ok(())
    }

    pub fn column_stats(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n=== ESTATÍSTICAS DAS COLUNAS ===")?;

        for stats in self.analyzer.stats_for(self.sheet, &STAT_COLUMNS) {
            writeln!(self.out, "\n{}:", stats.name)?;
            writeln!(self.out, "  Total de valores: {}", stats.total)?;
            writeln!(self.out, "  Valores não nulos: {}", stats.non_null)?;
            writeln!(self.out, "  Valores não zero: {}", stats.non_zero)?;
            writeln!(self.out, "  Tipo: {}", stats.dtype)?;

            if stats.first_non_zero.is_empty() {
                writeln!(self.out, "  Todos os valores são nulos ou zero")?;
            } else {
                let values: Vec<String> = stats.first_non_zero.iter().map(CellValue::repr).collect();
                writeln!(self.out, "  Primeiros valores não zero: [{}]", values.join(", "))?;
            }
        }
        Ok(())
    }

    pub fn column_listing(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n=== TODAS AS COLUNAS ===")?;
        for (i, name) in self.sheet.column_names().iter().enumerate() {
            writeln!(self.out, "{:2}. \"{}\"", i + 1, name)?;
        }
        Ok(())
    }

    pub fn sheet_info(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n=== INFORMAÇÕES DA PLANILHA ===")?;
        writeln!(self.out, "Nome da planilha: {}", self.sheet.sheet_name)?;
        writeln!(
            self.out,
            "Range da planilha: {}",
            self.sheet.dimensions.as_deref().unwrap_or("(vazia)")
        )
    }

    pub fn header_search(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n=== PROCURANDO COLUNAS PROBLEMÁTICAS ===")?;
        let headers = self.sheet.column_names();

        for column in STAT_COLUMNS {
            writeln!(self.out, "\nProcurando por: \"{}\"", column)?;
            match self.analyzer.header_matches(&headers, column) {
                HeaderMatch::Exact(index) => {
                    writeln!(self.out, "  Encontrada exata no índice {}", index)?;
                }
                HeaderMatch::Partial(matches) if matches.is_empty() => {
                    writeln!(self.out, "  Nenhuma correspondência encontrada")?;
                }
                HeaderMatch::Partial(matches) => {
                    writeln!(self.out, "  Correspondências parciais:")?;
                    for (index, header) in matches {
                        writeln!(self.out, "    {}: \"{}\"", index, header)?;
                    }
                }
            }
        }
        Ok(())
    }

    pub fn money_columns(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n=== ANÁLISE DE COLUNAS NUMÉRICAS ===")?;

        for column in self.analyzer.money_columns(self.sheet) {
            writeln!(self.out, "\n{} (índice {}):", column.name, column.index)?;
            writeln!(self.out, "  Total de linhas: {}", column.total)?;
            writeln!(self.out, "  Valores não nulos/vazios: {}", column.non_empty)?;
            writeln!(self.out, "  Valores numéricos não zero: {}", column.numeric_non_zero)?;

            if !column.first_non_empty.is_empty() {
                let values: Vec<String> = column.first_non_empty.iter()
                    .map(|v| serde_json::to_string(v).unwrap_or_else(|_| v.to_string()))
                    .collect();
                let kinds: Vec<&str> = column.first_non_empty.iter()
                    .map(CellValue::kind_name)
                    .collect();
                writeln!(self.out, "  Primeiros valores não nulos: {}", values.join(", "))?;
                writeln!(self.out, "  Tipos dos primeiros valores: {}", kinds.join(", "))?;
            }
        }
        Ok(())
    }

    pub fn raw_cells(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n=== VERIFICAÇÃO DIRETA DAS CÉLULAS ===")?;
        let sheet = self.sheet;
        let (row0, col0) = sheet.origin;

        writeln!(self.out, "\nPrimeira linha (cabeçalhos):")?;
        self.write_cells(row0, col0, &sheet.header_cells, usize::MAX)?;

        writeln!(self.out, "\nSegunda linha (primeira linha de dados):")?;
        self.write_cells(row0 + 1, col0, &sheet.first_data_cells, RAW_CELL_COLUMNS)
    }

    fn write_cells(
        &mut self,
        row: u32,
        first_col: u32,
        cells: &[Data],
        limit: usize,
    ) -> io::Result<()> {
        if cells.is_empty() {
            return writeln!(self.out, "  Linha não encontrada!");
        }
        for (offset, cell) in cells.iter().take(limit).enumerate() {
            let address = cell_reference(row, first_col + offset as u32);
            if matches!(cell, Data::Empty) {
                writeln!(self.out, "  {}: [vazio]", address)?;
            } else {
                writeln!(
                    self.out,
                    "  {}: \"{}\" (tipo: {})",
                    address,
                    cell_to_text(cell),
                    cell_type_code(cell)
                )?;
            }
        }
        Ok(())
    }
}
