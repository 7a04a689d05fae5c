use slideas_reveal::{ConvertOptions, convert_text};

const LECTURE: &str = r#"Title: Pandas
Subtitle: Data frames in practice
Theme: Work, 3
Palette: Dark
Size: 16:9
---
# Pandas

^ Welcome everyone
---
## What is Pandas?

- Built on numpy
- Tabular data

```python
import pandas as pd
# ---- comment, not a heading
^ not a note either
```

## Why use it?

### Speed
^ Mention vectorisation
---
Layout: Split

![inline 40%](img/numpy.png)
+++
![fit right](img/pandas.png)

^ Compare the two
---
Layout: Title
### Reading data
pd.read_csv(...)
---
## Resources

- [Docs](https://pandas.pydata.org)
"#;

#[test]
fn test_full_lecture() {
    let options = ConvertOptions::default();
    let output = convert_text(LECTURE, &options).expect("Conversion failed");

    let expected = format!(
        r#"---
format:
  revealjs:
    theme: serif
slide-format: revealjs
title: Pandas
subtitle: Data frames in practice
---


::: {{.notes}}

Welcome everyone

:::

---
## What is Pandas? {{.smaller}}

- Built on numpy
- Tabular data

```python
import pandas as pd
# ---- comment, not a heading
^ not a note either
```

### Why use it?

### Speed

::: {{.notes}}

Mention vectorisation

:::

---
---
:::: {{.columns}}
::: {{.column width="50%"}}

![](img/numpy.png)
:::
::: {{.column width="50%"}}
![](img/pandas.png)

:::
::::

::: {{.notes}}

Compare the two

:::

---
## Reading data
pd.read_csv(...)

---
## Resources {{.smaller}}

- [Docs](https://pandas.pydata.org)

---
{}"#,
        options.closing_slide
    );

    assert_eq!(output, expected);
}

#[test]
fn test_reserved_keys_never_leak() {
    let output = convert_text(LECTURE, &ConvertOptions::default()).unwrap();
    let front_matter = output.split("\n---\n").next().unwrap();
    assert!(!front_matter.contains("Theme:"));
    assert!(!front_matter.contains("palette"));
    assert!(!front_matter.contains("size"));
    assert_eq!(output.matches("slide-format: revealjs").count(), 1);
}
