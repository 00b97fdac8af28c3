// All LLM prompt constants for the Assessment module.
// The template is configuration data for the model, not business logic —
// edit wording here, never in the handler.

use crate::assessment::section::ProductSection;

/// System prompt for impact analysis. The report format lives in the user
/// template; this only pins down the role and output discipline.
pub const ASSESSMENT_SYSTEM: &str =
    "You are a regulatory and quality expert at a medical device manufacturer \
    analyzing the impact of a proposed change. \
    Follow the instructions exactly and keep the requested table format intact. \
    Do NOT add commentary outside the requested sections. \
    Do NOT invent document series that are not in the provided list.";

/// Impact analysis prompt template.
/// Replace: {product_name}, {department}, {change_description},
///          {product_section}, {document_series}
pub const ASSESSMENT_PROMPT_TEMPLATE: &str = r#"### Instructions
Generate a structured impact analysis for a change in a medical device company. Follow these steps:
1. **Analyze Change Description**: Intelligently interpret the change description, product, and department to identify the nature of the change (e.g., new supplier, packaging update) and affected processes (e.g., sealing, supplier audits).
2. **Determine Impacted Documents**: Using the provided document series, select documents that need to be created or updated based on the change's impact. Consider the product type and section (C or AB) to choose appropriate variants (e.g., PMTSEMD for Staplers, PMTS for AB section).
3. **Assess Impacts**: Evaluate impacts across predefined areas for each department (Design, Production, QC, QA, RA), assigning relevant documents and justifications.
4. **Generate Tables**: Create a table for each department with columns: Possible Impact Area, Impact, Documents Impacted, Justification.
5. **Provide Risk Assessment**: Summarize risks to quality, safety, or compliance, including mitigation steps.
6. **Classify Impact Type**: Classify as Critical, Major, or Minor with a brief justification.

### Inputs
- **Product**: {product_name}
- **Department Mentioned**: {department}
- **Change Description**: {change_description}
- **Product Section**: {product_section}

### Document Series
The following is the complete list of document series available for creation or update:
{document_series}

### Document Selection Guidelines
- Analyze the change description to identify affected processes, components, or systems (e.g., supplier addition, packaging material, sterilization).
- Select documents from the provided list that are directly relevant to the change. For example:
  - A new supplier may require `SC`, `ASL`, `QASOP` (supplier profile, list, audits) and TMF update.
  - A packaging change may require `PMTS` or section-specific variants (e.g., `PMTSEMD` for Staplers).
  - A new product variant may require `Product Master`.
- Use section-specific variants for Section C products:
  - Stapler/Trocar: `RMTSSTA`, `PMTSEMD`, `FGTSEMD`, `PRSOPEMD`, `QCSTPEMD`, `QPEMD`.
  - IUD: `RMTSIUD`, `PMTSIUD`, `FGTSIUD`, `PRSOPIUD`, `QCSTPIUD`, `QPIUD`.
  - Bulk Suture (SFE): `RMTSSFE`, `PMTSSFE`, `FGTSSFE`, `PRSOPSFE`, `QCSTPSFE`, `QPSFE`.
  - AB Section: Use `RMTS`, `PMTS`, `FGTS`, etc., unless Gelatin Sponge (`RMTSAGS`, `PMTSAGS`).
- Avoid irrelevant documents (e.g., do not select `EOD` unless standards are explicitly mentioned).
- Format documents as `[Series] - [Description]` (e.g., `[PMTS] - Packaging Material Specification`).

### Department Impact Tables
For each department (Design, Production, QC, QA, RA), evaluate and show all listed impact areas. Use "—" if no documents are impacted for an area.
Use this format:
```
Department: [Department Name]
| Possible Impact Area | Impact | Documents Impacted | Justification |
|----------------------|--------|---------------------|---------------|
| [Area]               | Yes/No | [Series] - [Description] or — | [Reason or "No impact"] |
```

### Departments and Impact Areas
- **Design**:
  - Device design, dimensions, and specification
  - Assembly of Components
  - Change in product Safety & Performance
  - Packaging Type & Sterilization Method
  - Raw Material, Packaging material, or Components
  - Others
- **Production**:
  - Manufacturing Processes - Flow chart, DHR, SOPs
  - Machines and equipment
  - Process Validation (IQ, OQ, PQ)
  - Production planning/Logistics
  - Environmental and Premises
  - Others
- **QC**:
  - Equipment and Instruments
  - Technical Specifications
  - Standard Testing Procedures
  - Sampling Plan
  - Quality Plan
  - Others
- **QA**:
  - QMS
  - Finished Device Specifications & DMR
  - Shelf life
  - Suppliers and Sub-contractors/Quality Agreements/Audits
  - Others
- **RA**:
  - Technical Documentation/Regulatory Files
  - Indications/Intended Use/PMS/Clinical
  - Labeling/Artwork
  - Notification to NBs/Competent Authorities
  - Others

### Justification Guidelines
- For impacted areas, provide a specific reason linking the change to the area or document (e.g., "New supplier requires updated supplier profile").
- For non-impacted areas, use "No impact" with a brief reason (e.g., "No change to manufacturing processes").
- Examples:
  - Change: "New supplier for Tyvek pouches"
    - Area: Suppliers (QA)
    - Document: `[SC] - Supplier Control`
    - Justification: "New supplier requires profile and quality agreement."
    - Area: Technical Specifications (QC)
    - Document: `[PMTS] - Packaging Material Specification`
    - Justification: "New specification for Tyvek pouch to be prepared."

### Risk Assessment
- Identify risks to quality, safety, or compliance (e.g., "New supplier may affect sealing performance").
- Suggest specific mitigation steps (e.g., "Conduct supplier audit, validate sealing process").
- Example: "New supplier for Tyvek pouches may affect material quality; requires supplier QMS certificate and sealing validation."

### Impact Type
- **Critical**: Affects patient safety, performance, or requires notified body approval.
- **Major**: Significant changes (e.g., material, design) requiring re-validation or DMR updates.
- **Minor**: Administrative, supplier, or equipment changes with no safety/performance impact.
- Default to Minor unless safety/regulatory impacts are identified.
- Provide 2–3 sentences justifying the classification.

### Example
**Input**:
- Product: Tyvek Pouch
- Department: QA
- Change: "M/s Jostick Adhesive is to be introduced as a new supplier for 1073B uncoated Tyvek pouches."
- Product Section: AB Section
**Output**:
Department: Design
| Possible Impact Area | Impact | Documents Impacted | Justification |
|----------------------|--------|---------------------|---------------|
| Device design, dimensions, and specification | No | — | No change to product design. |
| Assembly of Components | No | — | No impact on assembly. |
| Change in product Safety & Performance | Yes | — | Pre/post-ETO sterilization performance and sealing verification required. |
| Packaging Type & Sterilization Method | No | — | No change to sterilization method. |
| Raw Material, Packaging material, or Components | Yes | [PMTS] - Packaging Material Specification | New PMTS to be prepared for Tyvek pouch. |
| Others | No | — | No other impacts. |

Department: Production
| Possible Impact Area | Impact | Documents Impacted | Justification |
|----------------------|--------|---------------------|---------------|
| Manufacturing Processes - Flow chart, DHR, SOPs | No | — | No change to manufacturing processes. |
| Machines and equipment | Yes | — | Sealing performance check required for new packaging material. |
| Process Validation (IQ, OQ, PQ) | No | — | No validation required. |
| Production planning/Logistics | No | — | No impact on logistics. |
| Environmental and Premises | No | — | No impact on premises. |
| Others | No | — | No other impacts. |

Department: QC
| Possible Impact Area | Impact | Documents Impacted | Justification |
|----------------------|--------|---------------------|---------------|
| Equipment and Instruments | No | — | No impact on equipment. |
| Technical Specifications | Yes | [PMTS] - Packaging Material Specification | New specification for Tyvek pouch to be prepared. |
| Standard Testing Procedures | No | — | No change to testing procedures. |
| Sampling Plan | No | — | No change to sampling plan. |
| Quality Plan | No | — | No impact on quality plan. |
| Others | Yes | — | Training required for new material handling. |

Department: QA
| Possible Impact Area | Impact | Documents Impacted | Justification |
|----------------------|--------|---------------------|---------------|
| QMS | Yes | [QASOP] - Quality Assurance SOP | QMS certificate from supplier to be collected. |
| Finished Device Specifications & DMR | No | — | No impact on DMR. |
| Shelf life | No | — | No impact on shelf life. |
| Suppliers and Sub-contractors/Quality Agreements/Audits | Yes | [SC] - Supplier Control, [ASL] - Approved Supplier List | New supplier requires profile, quality agreement, and supplier list update. |
| Others | No | — | No other impacts. |

Department: RA
| Possible Impact Area | Impact | Documents Impacted | Justification |
|----------------------|--------|---------------------|---------------|
| Technical Documentation/Regulatory Files | Yes | [RA] - Manufacturing License and QMS Details | Supplier details to be added to TMF. |
| Indications/Intended Use/PMS/Clinical | No | — | No impact on intended use. |
| Labeling/Artwork | No | — | No change to labeling. |
| Notification to NBs/Competent Authorities | No | — | No notification required. |
| Others | No | — | No other impacts. |

**Risk Assessment**: The new supplier may affect pouch quality or sealing performance; requires supplier QMS certificate, material testing, and sealing validation to mitigate risks.
**Impact Type**: Minor. The change is administrative, involving a new supplier with no impact on product safety or performance, managed through standard quality processes."#;

/// Fills the assessment template. Pure string interpolation — the inputs are
/// unconstrained free text and are passed through as-is, empty strings
/// included.
pub fn build_assessment_prompt(
    product_name: &str,
    department: &str,
    change_description: &str,
    section: ProductSection,
    document_series: &str,
) -> String {
    ASSESSMENT_PROMPT_TEMPLATE
        .replace("{product_name}", product_name)
        .replace("{department}", department)
        .replace("{change_description}", change_description)
        .replace("{product_section}", &section.to_string())
        .replace("{document_series}", document_series)
}
