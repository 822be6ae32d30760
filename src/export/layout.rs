//! Archive layout of the import format
//!
//! Entry names, their order and every column list below are dictated by the
//! importer, which routes each file to a table by its name. Do not reorder.

/// Header of `02_chart_of_accounts.csv`
pub const ACCOUNTS_HEADER: &str =
    "account_code,account_name,account_type,parent_code,normal_balance,active,created_at";

/// Header of `04_journal_templates.csv`
pub const TEMPLATES_HEADER: &str = "template_name,category,cash_flow_category,template_type,description,is_favorite,is_system,active,version,usage_count,last_used_at";

/// Header of `05_journal_template_lines.csv`
pub const TEMPLATE_LINES_HEADER: &str =
    "template_name,line_order,account_code,account_hint,position,formula,description";

/// Header of `06_journal_template_tags.csv`
pub const TEMPLATE_TAGS_HEADER: &str = "template_name,tag";

/// Name of the manifest entry
pub const MANIFEST_ENTRY: &str = "MANIFEST.md";

/// What goes into an archive entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryContent {
    Manifest,
    Accounts,
    Templates,
    TemplateLines,
    TemplateTags,
    /// Header-only table for an entity this tool never populates
    Placeholder(&'static str),
}

/// One named entry of the archive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: &'static str,
    pub content: EntryContent,
}

const fn entry(name: &'static str, content: EntryContent) -> ArchiveEntry {
    ArchiveEntry { name, content }
}

const fn placeholder(name: &'static str, header: &'static str) -> ArchiveEntry {
    ArchiveEntry {
        name,
        content: EntryContent::Placeholder(header),
    }
}

/// The complete archive, in write order
pub const LAYOUT: [ArchiveEntry; 35] = [
    entry(MANIFEST_ENTRY, EntryContent::Manifest),
    placeholder(
        "01_company_config.csv",
        "company_name,company_address,company_phone,company_email,tax_id,npwp,nitku,fiscal_year_start_month,currency_code,signing_officer_name,signing_officer_title",
    ),
    entry("02_chart_of_accounts.csv", EntryContent::Accounts),
    placeholder(
        "03_salary_components.csv",
        "code,name,description,component_type,is_percentage,default_rate,default_amount,is_system,display_order,active,is_taxable,bpjs_category",
    ),
    entry("04_journal_templates.csv", EntryContent::Templates),
    entry("05_journal_template_lines.csv", EntryContent::TemplateLines),
    entry("06_journal_template_tags.csv", EntryContent::TemplateTags),
    // Reference data
    placeholder(
        "07_clients.csv",
        "code,name,contact_person,email,phone,address,npwp,nik,nitku,active,created_at",
    ),
    placeholder(
        "08_projects.csv",
        "code,name,client_code,status,start_date,end_date,budget_amount,contract_value,description,created_at",
    ),
    placeholder(
        "09_project_milestones.csv",
        "project_code,sequence,name,description,status,weight_percent,target_date,actual_date",
    ),
    placeholder(
        "10_project_payment_terms.csv",
        "project_code,sequence,milestone_sequence,template_name,name,is_percentage,percentage,amount,due_trigger,auto_post",
    ),
    // System configuration
    placeholder(
        "11_fiscal_periods.csv",
        "year,month,status,month_closed_at,month_closed_by,tax_filed_at,tax_filed_by",
    ),
    placeholder(
        "12_tax_deadlines.csv",
        "deadline_type,name,description,due_day,use_last_day_of_month,reminder_days_before,active",
    ),
    placeholder(
        "13_company_bank_accounts.csv",
        "bank_name,account_number,account_name,bank_branch,is_default,active",
    ),
    placeholder(
        "14_merchant_mappings.csv",
        "merchant_pattern,match_type,template_name,default_description,match_count,last_used_at",
    ),
    // Employees
    placeholder(
        "15_employees.csv",
        "employee_id,name,email,nik_ktp,npwp,ptkp_status,job_title,department,employment_type,hire_date,resign_date,bank_name,bank_account,bpjs_kesehatan_number,bpjs_ketenagakerjaan_number,employment_status,username",
    ),
    placeholder(
        "16_employee_salary_components.csv",
        "employee_id,component_code,rate,amount,effective_date,end_date",
    ),
    // Transactional data
    placeholder(
        "17_invoices.csv",
        "invoice_number,invoice_date,due_date,client_code,project_code,status,amount,notes,created_at",
    ),
    placeholder(
        "18_transactions.csv",
        "transaction_number,transaction_date,template_name,project_code,amount,description,reference_number,notes,status,void_reason,void_notes,voided_at,voided_by,posted_at,posted_by,created_at",
    ),
    placeholder(
        "19_transaction_account_mappings.csv",
        "transaction_number,template_name,line_order,account_code,amount",
    ),
    placeholder(
        "20_journal_entries.csv",
        "journal_number,journal_date,transaction_number,description,status,account_code,debit_amount,credit_amount,posted_at,voided_at,void_reason",
    ),
    // Payroll and amortization
    placeholder(
        "21_payroll_runs.csv",
        "payroll_period,period_start,period_end,status,total_gross,total_deductions,total_net_pay,total_company_bpjs,total_pph21,employee_count,notes,posted_at,cancelled_at,cancel_reason,created_at",
    ),
    placeholder(
        "22_payroll_details.csv",
        "payroll_period,employee_id,gross_salary,total_deductions,net_pay,bpjs_kes_employee,bpjs_kes_company,bpjs_jht_employee,bpjs_jht_company,bpjs_jp_employee,bpjs_jp_company,bpjs_jkk,bpjs_jkm,pph21",
    ),
    placeholder(
        "23_amortization_schedules.csv",
        "code,name,schedule_type,source_account_code,target_account_code,total_amount,total_periods,period_amount,start_date,status,auto_post,completed_periods,amortized_amount",
    ),
    placeholder(
        "24_amortization_entries.csv",
        "schedule_code,period_number,period_start,period_end,amount,status,journal_number,posted_at",
    ),
    // Tax and drafts
    placeholder(
        "25_tax_transaction_details.csv",
        "transaction_number,tax_type,counterparty_name,counterparty_npwp,counterparty_nik,counterparty_nitku,tax_object_code,dpp,tax_amount,faktur_number,faktur_date",
    ),
    placeholder(
        "26_tax_deadline_completions.csv",
        "deadline_type,year,month,completed_date,completed_by,reference_number,notes",
    ),
    placeholder(
        "27_draft_transactions.csv",
        "source,status,merchant_name,transaction_date,amount,suggested_template_name,merchant_confidence,date_confidence,amount_confidence,raw_ocr_text,processed_at,processed_by,rejection_reason",
    ),
    // Users; the importer keeps existing users when these are empty
    placeholder(
        "28_users.csv",
        "username,password,full_name,email,active,created_at",
    ),
    placeholder("29_user_roles.csv", "username,role,created_by,created_at"),
    placeholder(
        "30_user_template_preferences.csv",
        "username,template_name,is_favorite,use_count,last_used_at",
    ),
    placeholder(
        "31_telegram_user_links.csv",
        "telegram_user_id,telegram_username,username,is_active,linked_at",
    ),
    // System state
    placeholder(
        "32_audit_logs.csv",
        "timestamp,username,action,entity_type,entity_id,ip_address",
    ),
    placeholder(
        "33_transaction_sequences.csv",
        "sequence_type,prefix,year,last_number",
    ),
    placeholder(
        "documents/index.csv",
        "storage_path,original_filename,content_type,file_size,transaction_number,journal_number,uploaded_at",
    ),
];

/// Entry names in archive order
pub fn entry_names() -> impl Iterator<Item = &'static str> {
    LAYOUT.iter().map(|e| e.name)
}

/// Placeholder entries with their headers
pub fn placeholders() -> impl Iterator<Item = (&'static str, &'static str)> {
    LAYOUT.iter().filter_map(|e| match e.content {
        EntryContent::Placeholder(header) => Some((e.name, header)),
        _ => None,
    })
}

/// Look up an entry by name
pub fn find_entry(name: &str) -> Option<&'static ArchiveEntry> {
    LAYOUT.iter().find(|e| e.name == name)
}
